use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::id::IdGenerator;
use crate::storage::{
    DeleteItem, Item, PutItem, QueryItems, Result, StoreClient, StoreError, UpdateItem,
};

/// A request received by [`MockStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Put(PutItem),
    Update(UpdateItem),
    Delete(DeleteItem),
    Query(QueryItems),
}

/// Store double that records every request and replays scripted responses.
///
/// With nothing scripted, writes succeed returning no attributes and queries
/// return no items.
#[derive(Default)]
pub struct MockStore {
    calls: Mutex<Vec<Call>>,
    put_responses: Mutex<VecDeque<Result<()>>>,
    update_responses: Mutex<VecDeque<Result<Option<Item>>>>,
    delete_responses: Mutex<VecDeque<Result<Option<Item>>>>,
    query_responses: Mutex<VecDeque<Result<Vec<Item>>>>,
}

impl MockStore {
    pub fn with_put(self, response: Result<()>) -> Self {
        self.put_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_update(self, response: Result<Option<Item>>) -> Self {
        self.update_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_delete(self, response: Result<Option<Item>>) -> Self {
        self.delete_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_query(self, response: Result<Vec<Item>>) -> Self {
        self.query_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl StoreClient for MockStore {
    async fn put(&self, request: PutItem) -> Result<()> {
        self.record(Call::Put(request));
        self.put_responses.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn update(&self, request: UpdateItem) -> Result<Option<Item>> {
        self.record(Call::Update(request));
        self.update_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(None))
    }

    async fn delete(&self, request: DeleteItem) -> Result<Option<Item>> {
        self.record(Call::Delete(request));
        self.delete_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(None))
    }

    async fn query(&self, request: QueryItems) -> Result<Vec<Item>> {
        self.record(Call::Query(request));
        self.query_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Vec::new()))
    }
}

/// Always hands out the same identifier.
pub struct FixedId(pub &'static str);

impl IdGenerator for FixedId {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

pub fn network_error() -> StoreError {
    StoreError::ConnectionFailed("network".to_string())
}
