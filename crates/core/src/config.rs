//! Table constants injected into the resolvers.

use crate::keys;

/// Table name, partition key and sort-key prefixes of the single table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    /// Fixed partition key shared by every item of the application.
    pub partition_key: String,
    pub todo_prefix: String,
    pub user_prefix: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_name: "todoql".to_string(),
            partition_key: "TODO_APP".to_string(),
            todo_prefix: "TODO".to_string(),
            user_prefix: "USER".to_string(),
        }
    }
}

impl TableConfig {
    /// Sort key for a single todo: `TODO::<user_id>::<todo_id>`.
    pub fn todo_sort_key(&self, user_id: &str, todo_id: &str) -> String {
        keys::todo_sort_key(&self.todo_prefix, Some(user_id), Some(todo_id))
    }

    /// Sort-key prefix matching every todo of one user: `TODO::<user_id>`.
    pub fn user_todos_prefix(&self, user_id: &str) -> String {
        keys::todo_sort_key(&self.todo_prefix, Some(user_id), None)
    }

    /// Sort-key prefix matching every todo: `TODO`.
    pub fn all_todos_prefix(&self) -> String {
        keys::todo_sort_key(&self.todo_prefix, None, None)
    }

    /// Sort key for a user: `USER::<user_id>`.
    pub fn user_sort_key(&self, user_id: &str) -> String {
        keys::user_sort_key(&self.user_prefix, user_id)
    }

    /// Sort-key prefix matching every user: `USER`.
    pub fn all_users_prefix(&self) -> String {
        self.user_prefix.clone()
    }
}
