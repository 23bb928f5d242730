use tracing::{debug, warn};

use crate::entity::{
    decode_todo_sort_key, item_to_todo, todo_item, Todo, TodoInput, CONTENT_ATTRIBUTE,
    IS_COMPLETED_ATTRIBUTE,
};
use crate::storage::{
    AttributeValue, Condition, DeleteItem, PrimaryKey, PutItem, QueryItems, ReturnValues,
    UpdateItem,
};
use crate::validation::{require_present, ValidationError};

use super::{ResolverError, Resolvers, Result};

impl Resolvers {
    /// Creates a todo for `user_id` with a freshly generated id.
    ///
    /// A key collision surfaces as the raw conditional-check store error.
    pub async fn create_todo(&self, user_id: &str, content: Option<&str>) -> Result<Todo> {
        let content = content.unwrap_or_default();
        require_present(&[user_id, content], ValidationError::NewTodo)?;

        let todo_id = self.ids.generate();
        let sort_key = self.table.todo_sort_key(user_id, &todo_id);
        debug!(sort_key = %sort_key, "Creating todo");

        let request = PutItem {
            item: todo_item(&self.table.partition_key, &sort_key, content, false),
            condition: Some(Condition::KeyNotExists),
        };
        self.store.put(request).await.inspect_err(|e| {
            warn!(sort_key = %sort_key, error = %e, "Failed to create todo");
        })?;

        let (user_id, todo_id) = decode_todo_sort_key(&sort_key);
        Ok(Todo {
            user_id,
            todo_id,
            content: content.to_string(),
            is_completed: false,
        })
    }

    /// Sets the provided attributes of an existing todo and returns its new state.
    pub async fn update_todo(&self, input: TodoInput) -> Result<Todo> {
        let content = input.content.as_deref().unwrap_or_default();
        require_present(
            &[input.user_id.as_str(), input.todo_id.as_str(), content],
            ValidationError::TodoUpdate,
        )?;

        let sort_key = self.table.todo_sort_key(&input.user_id, &input.todo_id);
        debug!(sort_key = %sort_key, "Updating todo");

        let mut set = Vec::new();
        if let Some(content) = input.content {
            set.push((CONTENT_ATTRIBUTE.to_string(), AttributeValue::S(content)));
        }
        if let Some(is_completed) = input.is_completed {
            set.push((
                IS_COMPLETED_ATTRIBUTE.to_string(),
                AttributeValue::Bool(is_completed),
            ));
        }

        let request = UpdateItem {
            key: PrimaryKey::new(self.table.partition_key.as_str(), sort_key.as_str()),
            set,
            condition: Some(Condition::KeyExists),
            return_values: ReturnValues::AllNew,
        };
        let attributes = self.store.update(request).await.map_err(|e| {
            warn!(sort_key = %sort_key, error = %e, "Failed to update todo");
            ResolverError::from_missing_todo(e)
        })?;

        Ok(item_to_todo(&attributes.unwrap_or_default()))
    }

    /// Deletes an existing todo and returns its last stored state.
    pub async fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<Todo> {
        require_present(&[user_id, todo_id], ValidationError::TodoKey)?;

        let sort_key = self.table.todo_sort_key(user_id, todo_id);
        debug!(sort_key = %sort_key, "Deleting todo");

        let request = DeleteItem {
            key: PrimaryKey::new(self.table.partition_key.as_str(), sort_key.as_str()),
            condition: Some(Condition::KeyExists),
            return_values: ReturnValues::AllOld,
        };
        let attributes = self.store.delete(request).await.map_err(|e| {
            warn!(sort_key = %sort_key, error = %e, "Failed to delete todo");
            ResolverError::from_missing_todo(e)
        })?;

        Ok(item_to_todo(&attributes.unwrap_or_default()))
    }

    /// Lists every stored todo.
    pub async fn get_todos(&self) -> Result<Vec<Todo>> {
        self.query_todos(self.table.all_todos_prefix()).await
    }

    /// Lists the todos whose sort key starts with the user's prefix.
    pub async fn get_todos_of_user(&self, user_id: &str) -> Result<Vec<Todo>> {
        require_present(&[user_id], ValidationError::UserId)?;
        self.query_todos(self.table.user_todos_prefix(user_id))
            .await
    }

    async fn query_todos(&self, prefix: String) -> Result<Vec<Todo>> {
        debug!(prefix = %prefix, "Querying todos");
        let request = QueryItems::new(self.table.partition_key.as_str(), prefix);
        let items = self.store.query(request).await?;
        Ok(items.iter().map(item_to_todo).collect())
    }
}
