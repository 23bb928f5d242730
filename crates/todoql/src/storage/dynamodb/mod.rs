//! DynamoDB storage backend implementation.
//!
//! Implements `StoreClient` over a single table using `aws-sdk-dynamodb`.

mod error;
mod store;

pub use store::DynamoDbStore;
