//! Application state shared by every request handler.
//!
//! The state holds the GraphQL schema, which in turn owns the resolvers and
//! the store client selected at compile time.

use todoql_core::resolvers::Resolvers;

use crate::config::Config;
use crate::graphql::{build_schema, TodoSchema};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub schema: TodoSchema,
    /// Whether GraphiQL and introspection are served.
    pub introspection: bool,
}

impl AppState {
    /// Creates the state around already configured resolvers.
    pub fn build(resolvers: Resolvers, introspection: bool) -> Self {
        Self {
            schema: build_schema(resolvers, introspection),
            introspection,
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use std::sync::Arc;

    use super::*;
    use crate::mock_data::seed_demo_data;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage seeded with demo data.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let resolvers = Resolvers::new(Arc::new(InMemoryStore::new()), config.table.clone());
            seed_demo_data(&resolvers).await?;

            Ok(Self::build(resolvers, config.introspection_enabled()))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use std::sync::Arc;

    use super::*;
    use crate::storage::DynamoDbStore;

    impl AppState {
        /// Creates AppState backed by the DynamoDB table.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(table = %config.table.table_name, "Using DynamoDB storage");
            let store = DynamoDbStore::from_config(config).await;
            let resolvers = Resolvers::new(Arc::new(store), config.table.clone());

            Ok(Self::build(resolvers, config.introspection_enabled()))
        }
    }
}
