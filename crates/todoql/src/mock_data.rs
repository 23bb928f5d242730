use todoql_core::entity::{TodoInput, UserInput};
use todoql_core::resolvers::{Resolvers, Result};

/// Demo users and the todos created for each of them.
const DEMO_USERS: &[(&str, &str, &[&str])] = &[
    (
        "Ada Lovelace",
        "Analyst",
        &["Annotate the engine notes", "Write the Bernoulli program"],
    ),
    (
        "Grace Hopper",
        "Rear Admiral",
        &["Find the moth", "Ship the compiler", "Hand out nanoseconds"],
    ),
    ("Alan Turing", "Mathematician", &["Crack the daily key"]),
];

/// Seeds demo users and todos through the resolvers.
///
/// The first todo of every user is marked as completed.
pub async fn seed_demo_data(resolvers: &Resolvers) -> Result<()> {
    let mut todos = 0;

    for (name, title, contents) in DEMO_USERS {
        let user = resolvers
            .create_user(UserInput {
                name: name.to_string(),
                title: title.to_string(),
            })
            .await?;

        for (index, content) in contents.iter().enumerate() {
            let todo = resolvers.create_todo(&user.user_id, Some(*content)).await?;
            if index == 0 {
                resolvers
                    .update_todo(TodoInput {
                        user_id: todo.user_id,
                        todo_id: todo.todo_id,
                        content: Some(todo.content),
                        is_completed: Some(true),
                    })
                    .await?;
            }
            todos += 1;
        }
    }

    tracing::info!(users = DEMO_USERS.len(), todos, "Seeded demo data");
    Ok(())
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use std::sync::Arc;

    use todoql_core::config::TableConfig;

    use super::*;
    use crate::storage::InMemoryStore;

    #[tokio::test]
    async fn test_seed_demo_data() {
        let resolvers = Resolvers::new(Arc::new(InMemoryStore::new()), TableConfig::default());

        seed_demo_data(&resolvers).await.unwrap();

        let users = resolvers.get_users().await.unwrap();
        assert_eq!(users.len(), DEMO_USERS.len());

        let todos = resolvers.get_todos().await.unwrap();
        assert_eq!(todos.len(), 6);
        assert_eq!(todos.iter().filter(|todo| todo.is_completed).count(), 3);

        for user in &users {
            let own = resolvers.user_todos(user).await.unwrap();
            assert!(!own.is_empty());
            assert!(own.iter().all(|todo| todo.user_id == user.user_id));
        }
    }
}
