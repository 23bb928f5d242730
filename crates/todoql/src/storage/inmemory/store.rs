use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todoql_core::storage::{
    Condition, DeleteItem, Item, PrimaryKey, PutItem, QueryItems, Result, ReturnValues,
    StoreClient, StoreError, UpdateItem,
};

/// In-memory store with the same conditional-write semantics as the table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<BTreeMap<PrimaryKey, Item>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn check(condition: Option<Condition>, key_exists: bool) -> Result<()> {
    match condition {
        Some(condition) if !condition.holds(key_exists) => {
            Err(StoreError::conditional_check_failed())
        }
        _ => Ok(()),
    }
}

fn missing_key() -> StoreError {
    StoreError::Service {
        name: "ValidationException".to_string(),
        message: "One of the required keys was not given a value".to_string(),
        status_code: Some(400),
    }
}

#[async_trait]
impl StoreClient for InMemoryStore {
    async fn put(&self, request: PutItem) -> Result<()> {
        let key = PrimaryKey::from_item(&request.item).ok_or_else(missing_key)?;
        let mut items = self.items.write().await;
        check(request.condition, items.contains_key(&key))?;
        items.insert(key, request.item);
        Ok(())
    }

    async fn update(&self, request: UpdateItem) -> Result<Option<Item>> {
        let mut items = self.items.write().await;
        let old = items.get(&request.key).cloned();
        check(request.condition, old.is_some())?;

        let item = items
            .entry(request.key.clone())
            .or_insert_with(|| request.key.to_item());
        item.extend(request.set);

        Ok(match request.return_values {
            ReturnValues::None => None,
            ReturnValues::AllNew => Some(item.clone()),
            ReturnValues::AllOld => old,
        })
    }

    async fn delete(&self, request: DeleteItem) -> Result<Option<Item>> {
        let mut items = self.items.write().await;
        check(request.condition, items.contains_key(&request.key))?;
        let old = items.remove(&request.key);

        Ok(match request.return_values {
            ReturnValues::AllOld => old,
            ReturnValues::None | ReturnValues::AllNew => None,
        })
    }

    async fn query(&self, request: QueryItems) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|(key, _)| request.matches(key))
            .map(|(_, item)| item.clone())
            .collect())
    }
}
