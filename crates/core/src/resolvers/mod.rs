//! Resolver logic for todos and users.
//!
//! Each operation validates its arguments, derives the item key, issues a
//! single store request and maps the raw result back to a public entity.
//! Nothing is retained between calls.

mod error;
#[cfg(test)]
mod mock;
mod todo;
mod user;

use std::sync::Arc;

pub use error::{ResolverError, Result};

use crate::config::TableConfig;
use crate::id::{IdGenerator, RandomIdGenerator};
use crate::storage::StoreClient;

/// Entry point for every resolver, shared by all requests.
#[derive(Clone)]
pub struct Resolvers {
    store: Arc<dyn StoreClient>,
    table: TableConfig,
    ids: Arc<dyn IdGenerator>,
}

impl Resolvers {
    /// Creates resolvers over the given store, generating random identifiers.
    pub fn new(store: Arc<dyn StoreClient>, table: TableConfig) -> Self {
        Self {
            store,
            table,
            ids: Arc::new(RandomIdGenerator),
        }
    }

    /// Replaces the identifier generator (useful for testing).
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn table(&self) -> &TableConfig {
        &self.table
    }
}
