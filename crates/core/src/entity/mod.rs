mod mapping;
mod types;

pub use mapping::{
    decode_todo_sort_key, item_to_todo, item_to_user, item_to_user_todo, todo_item, user_item,
    CONTENT_ATTRIBUTE, IS_COMPLETED_ATTRIBUTE, NAME_ATTRIBUTE, TITLE_ATTRIBUTE,
};
pub use types::{Todo, TodoInput, User, UserInput};
