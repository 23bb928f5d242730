//! GraphQL schema.
//!
//! Query and mutation roots are merged from the per-entity objects. Every
//! resolver reaches the store through the [`Resolvers`] stored as schema data.

mod error;
mod todo;
mod user;

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, MergedObject, Object, Schema};
use todoql_core::resolvers::Resolvers;

use todo::{TodoMutation, TodoQuery};
use user::{UserMutation, UserQuery};

pub type TodoSchema = Schema<Query, Mutation, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct Query(HelloQuery, TodoQuery, UserQuery);

#[derive(MergedObject, Default)]
pub struct Mutation(TodoMutation, UserMutation);

/// Liveness probe reachable through GraphQL itself.
#[derive(Default)]
pub struct HelloQuery;

#[Object]
impl HelloQuery {
    async fn hello(&self) -> Option<String> {
        Some("Hello, World!".to_string())
    }
}

/// Builds the schema. Introspection is only answered when `introspection` is set.
pub fn build_schema(resolvers: Resolvers, introspection: bool) -> TodoSchema {
    let builder = Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .extension(Tracing)
        .data(resolvers);

    if introspection {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use std::sync::Arc;

    use async_graphql::{value, Request};
    use todoql_core::config::TableConfig;
    use todoql_core::id::IdGenerator;

    use super::*;
    use crate::storage::InMemoryStore;

    struct FixedId(&'static str);

    impl IdGenerator for FixedId {
        fn generate(&self) -> String {
            self.0.to_string()
        }
    }

    fn schema(id: &'static str) -> TodoSchema {
        let resolvers = Resolvers::new(Arc::new(InMemoryStore::new()), TableConfig::default())
            .with_id_generator(Arc::new(FixedId(id)));
        build_schema(resolvers, true)
    }

    #[tokio::test]
    async fn test_hello() {
        let response = schema("1").execute("{ hello }").await;

        assert_eq!(response.data, value!({ "hello": "Hello, World!" }));
    }

    #[tokio::test]
    async fn test_create_then_list_todos() {
        let schema = schema("5253");

        let response = schema
            .execute(r#"mutation { createTodo(userID: "13", content: "Learn X") { userID todoID content isCompleted } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data,
            value!({
                "createTodo": {
                    "userID": "13",
                    "todoID": "5253",
                    "content": "Learn X",
                    "isCompleted": false
                }
            })
        );

        let response = schema
            .execute(r#"{ getTodosOfUser(userID: "13") { todoID } getTodos { userID } }"#)
            .await;
        assert_eq!(
            response.data,
            value!({
                "getTodosOfUser": [{ "todoID": "5253" }],
                "getTodos": [{ "userID": "13" }]
            })
        );
    }

    #[tokio::test]
    async fn test_duplicate_create_surfaces_store_error() {
        let schema = schema("same");
        let create = r#"mutation { createTodo(userID: "1", content: "x") { todoID } }"#;

        assert!(schema.execute(create).await.errors.is_empty());
        let response = schema.execute(create).await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "The conditional request failed");
    }

    #[tokio::test]
    async fn test_update_missing_todo_carries_error_extensions() {
        let response = schema("1")
            .execute(
                r#"mutation { updateTodo(todo: { userID: "1", todoID: "nope", content: "x" }) { todoID } }"#,
            )
            .await;

        assert_eq!(response.errors.len(), 1);
        let error = &response.errors[0];
        assert_eq!(
            error.message,
            "Todo with the provided userID and todoID does not exist"
        );
        let extensions = serde_json::to_value(error.extensions.as_ref().unwrap()).unwrap();
        assert_eq!(extensions["name"], "ConditionalCheckFailedException");
        assert_eq!(extensions["statusCode"], 400);
    }

    #[tokio::test]
    async fn test_update_and_delete_todo() {
        let schema = schema("t1");
        schema
            .execute(r#"mutation { createTodo(userID: "1", content: "old") { todoID } }"#)
            .await;

        let response = schema
            .execute(
                r#"mutation { updateTodo(todo: { userID: "1", todoID: "t1", content: "new", isCompleted: true }) { content isCompleted } }"#,
            )
            .await;
        assert_eq!(
            response.data,
            value!({ "updateTodo": { "content": "new", "isCompleted": true } })
        );

        let response = schema
            .execute(r#"mutation { deleteTodo(userID: "1", todoID: "t1") { todoID content } }"#)
            .await;
        assert_eq!(
            response.data,
            value!({ "deleteTodo": { "todoID": "t1", "content": "new" } })
        );

        let response = schema.execute("{ getTodos { todoID } }").await;
        assert_eq!(response.data, value!({ "getTodos": [] }));
    }

    #[tokio::test]
    async fn test_update_without_is_completed_resets_flag() {
        let schema = schema("t1");
        schema
            .execute(r#"mutation { createTodo(userID: "1", content: "old") { todoID } }"#)
            .await;
        schema
            .execute(
                r#"mutation { updateTodo(todo: { userID: "1", todoID: "t1", content: "a", isCompleted: true }) { todoID } }"#,
            )
            .await;

        let response = schema
            .execute(
                r#"mutation { updateTodo(todo: { userID: "1", todoID: "t1", content: "b" }) { content isCompleted } }"#,
            )
            .await;

        assert_eq!(
            response.data,
            value!({ "updateTodo": { "content": "b", "isCompleted": false } })
        );
    }

    #[tokio::test]
    async fn test_update_requires_content() {
        let response = schema("t1")
            .execute(r#"mutation { updateTodo(todo: { userID: "1", todoID: "t1" }) { todoID } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.data, async_graphql::Value::Null);
    }

    #[tokio::test]
    async fn test_validation_error_message() {
        let response = schema("1")
            .execute(r#"mutation { createTodo(userID: " ", content: "x") { todoID } }"#)
            .await;

        assert_eq!(
            response.errors[0].message,
            "userID and content cannot be empty"
        );
    }

    #[tokio::test]
    async fn test_users_with_nested_todos() {
        let schema = schema("7");
        schema
            .execute(r#"mutation { createUser(data: { name: "Grace", title: "Admiral" }) { userID } }"#)
            .await;
        schema
            .execute(r#"mutation { createTodo(userID: "7", content: "sail") { todoID } }"#)
            .await;

        let response = schema
            .execute("{ getUsers { userID name title todos { userID todoID content } } }")
            .await;

        assert_eq!(
            response.data,
            value!({
                "getUsers": [{
                    "userID": "7",
                    "name": "Grace",
                    "title": "Admiral",
                    "todos": [{ "userID": "7", "todoID": "7", "content": "sail" }]
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_introspection_can_be_disabled() {
        let resolvers = Resolvers::new(Arc::new(InMemoryStore::new()), TableConfig::default());
        let schema = build_schema(resolvers, false);

        let response = schema
            .execute(Request::new("{ __schema { queryType { name } } }"))
            .await;

        let data = serde_json::to_value(&response.data).unwrap();
        assert!(data.pointer("/__schema/queryType/name").is_none());
    }
}
