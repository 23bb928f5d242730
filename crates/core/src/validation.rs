//! Argument validation applied before any store access.

use thiserror::Error;

/// Required arguments that were empty or whitespace-only.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("userID and content cannot be empty")]
    NewTodo,
    #[error("userID, todoID and content cannot be empty")]
    TodoUpdate,
    #[error("userID and todoID cannot be empty")]
    TodoKey,
    #[error("userID cannot be empty")]
    UserId,
    #[error("name and title cannot be empty")]
    NewUser,
}

/// Returns true if the value is empty after trimming.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fails with `error` if any of the values is blank.
pub fn require_present(values: &[&str], error: ValidationError) -> Result<(), ValidationError> {
    if values.iter().any(|value| is_blank(value)) {
        return Err(error);
    }
    Ok(())
}
