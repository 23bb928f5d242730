use async_graphql::{ComplexObject, Context, InputObject, Object, Result, SimpleObject};
use todoql_core::entity::{User, UserInput};
use todoql_core::resolvers::Resolvers;

use super::error::to_graphql_error;
use super::todo::{todo_list, TodoObject};

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User", complex)]
pub struct UserObject {
    #[graphql(name = "userID")]
    pub user_id: String,
    pub name: String,
    pub title: String,
}

#[ComplexObject]
impl UserObject {
    async fn todos(&self, ctx: &Context<'_>) -> Result<Vec<TodoObject>> {
        let resolvers = ctx.data_unchecked::<Resolvers>();
        let todos = resolvers
            .user_todos(&self.clone().into())
            .await
            .map_err(to_graphql_error)?;
        Ok(todo_list(todos))
    }
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            title: user.title,
        }
    }
}

impl From<UserObject> for User {
    fn from(user: UserObject) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            title: user.title,
        }
    }
}

#[derive(Debug, InputObject)]
#[graphql(name = "UserInput")]
pub struct UserInputObject {
    pub name: String,
    pub title: String,
}

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let resolvers = ctx.data_unchecked::<Resolvers>();
        let users = resolvers.get_users().await.map_err(to_graphql_error)?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, data: UserInputObject) -> Result<UserObject> {
        let resolvers = ctx.data_unchecked::<Resolvers>();
        resolvers
            .create_user(UserInput {
                name: data.name,
                title: data.title,
            })
            .await
            .map(UserObject::from)
            .map_err(to_graphql_error)
    }
}
