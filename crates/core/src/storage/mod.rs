#[cfg(feature = "dynamodb")]
pub mod dynamodb;
mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::StoreClient;
pub use types::{
    AttributeValue, Condition, DeleteItem, Item, PrimaryKey, PutItem, QueryItems, ReturnValues,
    UpdateItem, PARTITION_KEY_ATTRIBUTE, SORT_KEY_ATTRIBUTE,
};
