use std::env;

use todoql_core::config::TableConfig;

/// Endpoint of a locally running DynamoDB.
pub const LOCAL_ENDPOINT: &str = "http://localhost:8000";
/// Region reported to the SDK when talking to the local endpoint.
pub const LOCAL_REGION: &str = "localhost";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Table name, partition key and sort-key prefixes.
    pub table: TableConfig,
    /// Deployment environment (`NODE_ENV`), if set.
    pub node_env: Option<String>,
    /// Whether the service runs offline against a local store.
    pub is_offline: bool,
    /// Explicit store endpoint, overriding the local one.
    pub dynamodb_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "todoql")
    /// - `TODO_APP_PK` - Partition key shared by every item (default: "TODO_APP")
    /// - `PREFIX_TODO_SK` - Todo sort-key prefix (default: "TODO")
    /// - `PREFIX_USER_SK` - User sort-key prefix (default: "USER")
    /// - `NODE_ENV` - "production" disables introspection, "test" selects the local endpoint
    /// - `IS_OFFLINE` - Any value selects the local endpoint
    /// - `DYNAMODB_ENDPOINT` - Explicit endpoint override
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = TableConfig::default();
        let var = |name: &str, default: String| lookup(name).unwrap_or(default);

        Self {
            table: TableConfig {
                table_name: var("DYNAMODB_TABLE_NAME", defaults.table_name),
                partition_key: var("TODO_APP_PK", defaults.partition_key),
                todo_prefix: var("PREFIX_TODO_SK", defaults.todo_prefix),
                user_prefix: var("PREFIX_USER_SK", defaults.user_prefix),
            },
            node_env: lookup("NODE_ENV"),
            is_offline: lookup("IS_OFFLINE").is_some(),
            dynamodb_endpoint: lookup("DYNAMODB_ENDPOINT"),
        }
    }

    /// Introspection and GraphiQL are served everywhere but production.
    pub fn introspection_enabled(&self) -> bool {
        self.node_env.as_deref() != Some("production")
    }

    /// The endpoint to use instead of the regional one, if any.
    pub fn endpoint_override(&self) -> Option<&str> {
        if let Some(endpoint) = self.dynamodb_endpoint.as_deref() {
            return Some(endpoint);
        }
        if self.is_offline || self.node_env.as_deref() == Some("test") {
            return Some(LOCAL_ENDPOINT);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config(&[]);

        assert_eq!(config.table, TableConfig::default());
        assert!(config.introspection_enabled());
        assert_eq!(config.endpoint_override(), None);
    }

    #[test]
    fn test_table_overrides() {
        let config = config(&[
            ("DYNAMODB_TABLE_NAME", "todos-dev"),
            ("TODO_APP_PK", "APP"),
            ("PREFIX_TODO_SK", "T"),
            ("PREFIX_USER_SK", "U"),
        ]);

        assert_eq!(config.table.table_name, "todos-dev");
        assert_eq!(config.table.partition_key, "APP");
        assert_eq!(config.table.todo_sort_key("1", "2"), "T::1::2");
        assert_eq!(config.table.user_sort_key("1"), "U::1");
    }

    #[test]
    fn test_production_disables_introspection() {
        assert!(!config(&[("NODE_ENV", "production")]).introspection_enabled());
        assert!(config(&[("NODE_ENV", "staging")]).introspection_enabled());
    }

    #[test]
    fn test_local_endpoint_selection() {
        assert_eq!(
            config(&[("IS_OFFLINE", "true")]).endpoint_override(),
            Some(LOCAL_ENDPOINT)
        );
        assert_eq!(
            config(&[("NODE_ENV", "test")]).endpoint_override(),
            Some(LOCAL_ENDPOINT)
        );
        assert_eq!(
            config(&[("IS_OFFLINE", "1"), ("DYNAMODB_ENDPOINT", "http://db:8000")])
                .endpoint_override(),
            Some("http://db:8000")
        );
    }
}
