use async_trait::async_trait;

use super::{DeleteItem, Item, PutItem, QueryItems, Result, UpdateItem};

/// Client for the single-table key-value store.
///
/// Every call is one round trip. Conditional writes are atomic per item;
/// callers rely on that instead of coordinating among themselves.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Stores an item, failing with a conditional-check error if the condition does not hold.
    async fn put(&self, request: PutItem) -> Result<()>;

    /// Updates an item and returns the image selected by `return_values`.
    async fn update(&self, request: UpdateItem) -> Result<Option<Item>>;

    /// Deletes an item and returns the image selected by `return_values`.
    async fn delete(&self, request: DeleteItem) -> Result<Option<Item>>;

    /// Returns every item matching the query, possibly none.
    async fn query(&self, request: QueryItems) -> Result<Vec<Item>>;
}
