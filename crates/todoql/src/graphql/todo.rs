use async_graphql::{Context, InputObject, Object, Result, SimpleObject};
use todoql_core::entity::{Todo, TodoInput};
use todoql_core::resolvers::Resolvers;

use super::error::to_graphql_error;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Todo")]
pub struct TodoObject {
    #[graphql(name = "userID")]
    pub user_id: String,
    #[graphql(name = "todoID")]
    pub todo_id: String,
    pub content: String,
    pub is_completed: bool,
}

impl From<Todo> for TodoObject {
    fn from(todo: Todo) -> Self {
        Self {
            user_id: todo.user_id,
            todo_id: todo.todo_id,
            content: todo.content,
            is_completed: todo.is_completed,
        }
    }
}

/// Addressed update of an existing todo. An omitted `isCompleted` resets the flag.
#[derive(Debug, InputObject)]
#[graphql(name = "TodoInput")]
pub struct TodoInputObject {
    #[graphql(name = "userID")]
    pub user_id: String,
    #[graphql(name = "todoID")]
    pub todo_id: String,
    pub content: String,
    #[graphql(default = false)]
    pub is_completed: bool,
}

impl From<TodoInputObject> for TodoInput {
    fn from(input: TodoInputObject) -> Self {
        Self {
            user_id: input.user_id,
            todo_id: input.todo_id,
            content: Some(input.content),
            is_completed: Some(input.is_completed),
        }
    }
}

pub(super) fn todo_list(todos: Vec<Todo>) -> Vec<TodoObject> {
    todos.into_iter().map(TodoObject::from).collect()
}

#[derive(Default)]
pub struct TodoQuery;

#[Object]
impl TodoQuery {
    async fn get_todos(&self, ctx: &Context<'_>) -> Result<Vec<TodoObject>> {
        let resolvers = ctx.data_unchecked::<Resolvers>();
        let todos = resolvers.get_todos().await.map_err(to_graphql_error)?;
        Ok(todo_list(todos))
    }

    async fn get_todos_of_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: String,
    ) -> Result<Vec<TodoObject>> {
        let resolvers = ctx.data_unchecked::<Resolvers>();
        let todos = resolvers
            .get_todos_of_user(&user_id)
            .await
            .map_err(to_graphql_error)?;
        Ok(todo_list(todos))
    }
}

#[derive(Default)]
pub struct TodoMutation;

#[Object]
impl TodoMutation {
    async fn create_todo(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: String,
        content: Option<String>,
    ) -> Result<TodoObject> {
        let resolvers = ctx.data_unchecked::<Resolvers>();
        resolvers
            .create_todo(&user_id, content.as_deref())
            .await
            .map(TodoObject::from)
            .map_err(to_graphql_error)
    }

    async fn update_todo(&self, ctx: &Context<'_>, todo: TodoInputObject) -> Result<TodoObject> {
        let resolvers = ctx.data_unchecked::<Resolvers>();
        resolvers
            .update_todo(todo.into())
            .await
            .map(TodoObject::from)
            .map_err(to_graphql_error)
    }

    async fn delete_todo(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: String,
        #[graphql(name = "todoID")] todo_id: String,
    ) -> Result<TodoObject> {
        let resolvers = ctx.data_unchecked::<Resolvers>();
        resolvers
            .delete_todo(&user_id, &todo_id)
            .await
            .map(TodoObject::from)
            .map_err(to_graphql_error)
    }
}
