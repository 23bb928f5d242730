use tracing::{debug, warn};

use crate::entity::{item_to_user, item_to_user_todo, user_item, Todo, User, UserInput};
use crate::storage::{Condition, PutItem, QueryItems};
use crate::validation::{require_present, ValidationError};

use super::{Resolvers, Result};

impl Resolvers {
    /// Creates a user with a freshly generated id.
    pub async fn create_user(&self, input: UserInput) -> Result<User> {
        require_present(
            &[input.name.as_str(), input.title.as_str()],
            ValidationError::NewUser,
        )?;

        let user_id = self.ids.generate();
        let sort_key = self.table.user_sort_key(&user_id);
        debug!(sort_key = %sort_key, "Creating user");

        let request = PutItem {
            item: user_item(
                &self.table.partition_key,
                &sort_key,
                &input.name,
                &input.title,
            ),
            condition: Some(Condition::KeyNotExists),
        };
        self.store.put(request).await.inspect_err(|e| {
            warn!(sort_key = %sort_key, error = %e, "Failed to create user");
        })?;

        Ok(User {
            user_id,
            name: input.name,
            title: input.title,
        })
    }

    /// Lists every stored user.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let prefix = self.table.all_users_prefix();
        debug!(prefix = %prefix, "Querying users");
        let request = QueryItems::new(self.table.partition_key.as_str(), prefix);
        let items = self.store.query(request).await?;
        Ok(items.iter().map(item_to_user).collect())
    }

    /// Lists the todos belonging to `user`.
    pub async fn user_todos(&self, user: &User) -> Result<Vec<Todo>> {
        let prefix = self.table.user_todos_prefix(&user.user_id);
        debug!(prefix = %prefix, "Querying user todos");
        let request = QueryItems::new(self.table.partition_key.as_str(), prefix);
        let items = self.store.query(request).await?;
        Ok(items
            .iter()
            .map(|item| item_to_user_todo(&user.user_id, item))
            .collect())
    }
}
