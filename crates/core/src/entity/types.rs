use serde::{Deserialize, Serialize};

/// A todo as exposed to API clients. Identity is the `(user_id, todo_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "todoID")]
    pub todo_id: String,
    pub content: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

/// A user as exposed to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub name: String,
    pub title: String,
}

/// Addressed update of an existing todo.
///
/// `None` leaves the attribute untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoInput {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "todoID")]
    pub todo_id: String,
    pub content: Option<String>,
    #[serde(rename = "isCompleted")]
    pub is_completed: Option<bool>,
}

/// Data for a new user. The id is generated server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub title: String,
}
