//! Conversions between raw stored items and public entities.
//!
//! The mapping is permissive: a sort key with too few segments, or an item
//! missing an attribute, yields empty strings and `false` instead of an error.

use crate::keys::KEY_SEPARATOR;
use crate::storage::{AttributeValue, Item, PARTITION_KEY_ATTRIBUTE, SORT_KEY_ATTRIBUTE};

use super::{Todo, User};

pub const CONTENT_ATTRIBUTE: &str = "content";
pub const IS_COMPLETED_ATTRIBUTE: &str = "isCompleted";
pub const NAME_ATTRIBUTE: &str = "name";
pub const TITLE_ATTRIBUTE: &str = "title";

/// Build the raw item for a todo.
pub fn todo_item(partition_key: &str, sort_key: &str, content: &str, is_completed: bool) -> Item {
    Item::from([
        (PARTITION_KEY_ATTRIBUTE.to_string(), AttributeValue::from(partition_key)),
        (SORT_KEY_ATTRIBUTE.to_string(), AttributeValue::from(sort_key)),
        (CONTENT_ATTRIBUTE.to_string(), AttributeValue::from(content)),
        (IS_COMPLETED_ATTRIBUTE.to_string(), AttributeValue::from(is_completed)),
    ])
}

/// Build the raw item for a user.
pub fn user_item(partition_key: &str, sort_key: &str, name: &str, title: &str) -> Item {
    Item::from([
        (PARTITION_KEY_ATTRIBUTE.to_string(), AttributeValue::from(partition_key)),
        (SORT_KEY_ATTRIBUTE.to_string(), AttributeValue::from(sort_key)),
        (NAME_ATTRIBUTE.to_string(), AttributeValue::from(name)),
        (TITLE_ATTRIBUTE.to_string(), AttributeValue::from(title)),
    ])
}

/// Split a todo sort key into `(user_id, todo_id)`, discarding the prefix.
pub fn decode_todo_sort_key(sort_key: &str) -> (String, String) {
    (segment(sort_key, 1), segment(sort_key, 2))
}

/// Convert a stored todo item into a [`Todo`].
pub fn item_to_todo(item: &Item) -> Todo {
    let (user_id, todo_id) = decode_todo_sort_key(&get_string(item, SORT_KEY_ATTRIBUTE));
    Todo {
        user_id,
        todo_id,
        content: get_string(item, CONTENT_ATTRIBUTE),
        is_completed: get_bool(item, IS_COMPLETED_ATTRIBUTE),
    }
}

/// Convert a stored todo item into a [`Todo`] owned by an already known user.
///
/// Only the todo id is read from the sort key.
pub fn item_to_user_todo(user_id: &str, item: &Item) -> Todo {
    Todo {
        user_id: user_id.to_string(),
        todo_id: segment(&get_string(item, SORT_KEY_ATTRIBUTE), 2),
        content: get_string(item, CONTENT_ATTRIBUTE),
        is_completed: get_bool(item, IS_COMPLETED_ATTRIBUTE),
    }
}

/// Convert a stored user item into a [`User`].
pub fn item_to_user(item: &Item) -> User {
    User {
        user_id: segment(&get_string(item, SORT_KEY_ATTRIBUTE), 1),
        name: get_string(item, NAME_ATTRIBUTE),
        title: get_string(item, TITLE_ATTRIBUTE),
    }
}

fn segment(sort_key: &str, index: usize) -> String {
    sort_key
        .split(KEY_SEPARATOR)
        .nth(index)
        .unwrap_or_default()
        .to_string()
}

fn get_string(item: &Item, key: &str) -> String {
    item.get(key)
        .and_then(AttributeValue::as_s)
        .unwrap_or_default()
        .to_string()
}

fn get_bool(item: &Item, key: &str) -> bool {
    item.get(key)
        .and_then(AttributeValue::as_bool)
        .unwrap_or_default()
}
