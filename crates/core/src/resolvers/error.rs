use thiserror::Error;

use crate::storage::StoreError;
use crate::validation::ValidationError;

/// Errors surfaced by the resolvers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Update or delete addressed a todo key that is not stored.
    #[error("Todo with the provided userID and todoID does not exist")]
    TodoNotFound {
        /// Name of the store error that reported the missing key.
        name: String,
        status_code: Option<u16>,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResolverError {
    pub const VALIDATION_ERROR: &'static str = "ValidationError";

    /// Translates a failed existence check into [`ResolverError::TodoNotFound`],
    /// keeping the store error's name and status code. Other errors pass through.
    pub fn from_missing_todo(error: StoreError) -> Self {
        if error.is_conditional_check_failed() {
            Self::TodoNotFound {
                name: error.name().to_string(),
                status_code: error.status_code(),
            }
        } else {
            Self::Store(error)
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Validation(_) => Self::VALIDATION_ERROR,
            Self::TodoNotFound { name, .. } => name,
            Self::Store(error) => error.name(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Validation(_) => None,
            Self::TodoNotFound { status_code, .. } => *status_code,
            Self::Store(error) => error.status_code(),
        }
    }
}

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_todo_translation_keeps_name_and_status() {
        let error = ResolverError::from_missing_todo(StoreError::conditional_check_failed());

        assert_eq!(
            error.to_string(),
            "Todo with the provided userID and todoID does not exist"
        );
        assert_eq!(error.name(), "ConditionalCheckFailedException");
        assert_eq!(error.status_code(), Some(400));
    }

    #[test]
    fn test_other_store_errors_pass_through() {
        let store_error = StoreError::ConnectionFailed("network".to_string());

        let error = ResolverError::from_missing_todo(store_error.clone());

        assert_eq!(error, ResolverError::Store(store_error));
        assert_eq!(error.to_string(), "Connection failed: network");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let error = ResolverError::from(ValidationError::TodoKey);
        assert_eq!(error.to_string(), "userID and todoID cannot be empty");
        assert_eq!(error.name(), "ValidationError");
        assert_eq!(error.status_code(), None);
    }
}
