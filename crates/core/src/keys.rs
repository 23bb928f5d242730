//! Sort-key generation for the single-table design.
//!
//! Pure functions, no side effects. Identifiers are opaque: a `::` inside an
//! identifier is not escaped and will be indistinguishable from a separator.

/// Separator between the segments of a sort key.
pub const KEY_SEPARATOR: &str = "::";

/// Generate a todo sort key or sort-key prefix.
///
/// - no user: `<prefix>` (every todo)
/// - user only: `<prefix>::<user_id>` (one user's todos)
/// - user and todo: `<prefix>::<user_id>::<todo_id>` (one todo)
///
/// An empty user id counts as absent, so a todo id without a user id yields
/// the bare prefix.
pub fn todo_sort_key(prefix: &str, user_id: Option<&str>, todo_id: Option<&str>) -> String {
    match (user_id.filter(|id| !id.is_empty()), todo_id.filter(|id| !id.is_empty())) {
        (Some(user_id), Some(todo_id)) => {
            format!("{prefix}{KEY_SEPARATOR}{user_id}{KEY_SEPARATOR}{todo_id}")
        }
        (Some(user_id), None) => format!("{prefix}{KEY_SEPARATOR}{user_id}"),
        (None, _) => prefix.to_string(),
    }
}

/// Generate a user sort key.
///
/// Pattern: `<prefix>::<user_id>`
pub fn user_sort_key(prefix: &str, user_id: &str) -> String {
    format!("{prefix}{KEY_SEPARATOR}{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_sort_key_bare_prefix() {
        assert_eq!(todo_sort_key("TODO", None, None), "TODO");
    }

    #[test]
    fn test_todo_sort_key_user_prefix() {
        assert_eq!(todo_sort_key("TODO", Some("13"), None), "TODO::13");
    }

    #[test]
    fn test_todo_sort_key_item() {
        assert_eq!(todo_sort_key("TODO", Some("13"), Some("5253")), "TODO::13::5253");
    }

    #[test]
    fn test_todo_sort_key_ignores_todo_without_user() {
        assert_eq!(todo_sort_key("TODO", None, Some("5253")), "TODO");
        assert_eq!(todo_sort_key("TODO", Some(""), Some("5253")), "TODO");
    }

    #[test]
    fn test_user_sort_key() {
        assert_eq!(user_sort_key("USER", "V1StGXR8"), "USER::V1StGXR8");
    }

    #[test]
    fn test_separator_inside_identifier_is_not_escaped() {
        let key = todo_sort_key("TODO", Some("a::b"), Some("c"));
        assert_eq!(key, "TODO::a::b::c");
        // Splitting no longer recovers the original identifiers.
        let segments: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        assert_eq!(segments, vec!["TODO", "a", "b", "c"]);
    }
}
