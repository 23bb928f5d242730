use thiserror::Error;

/// Errors reported by the store client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The existence condition attached to a write did not hold.
    #[error("{message}")]
    ConditionalCheckFailed {
        message: String,
        status_code: Option<u16>,
    },
    /// Any other error returned by the store service.
    #[error("{message}")]
    Service {
        name: String,
        message: String,
        status_code: Option<u16>,
    },
    /// The request never got a response.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

impl StoreError {
    pub const CONDITIONAL_CHECK_FAILED: &'static str = "ConditionalCheckFailedException";
    pub const NETWORKING_ERROR: &'static str = "NetworkingError";

    /// Conditional-check failure with the message and status code the service uses.
    pub fn conditional_check_failed() -> Self {
        Self::ConditionalCheckFailed {
            message: "The conditional request failed".to_string(),
            status_code: Some(400),
        }
    }

    /// Identifying name of the error, as reported by the store.
    pub fn name(&self) -> &str {
        match self {
            Self::ConditionalCheckFailed { .. } => Self::CONDITIONAL_CHECK_FAILED,
            Self::Service { name, .. } => name,
            Self::ConnectionFailed(_) => Self::NETWORKING_ERROR,
        }
    }

    /// HTTP status code of the store response, when there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ConditionalCheckFailed { status_code, .. } => *status_code,
            Self::Service { status_code, .. } => *status_code,
            Self::ConnectionFailed(_) => None,
        }
    }

    pub fn is_conditional_check_failed(&self) -> bool {
        matches!(self, Self::ConditionalCheckFailed { .. })
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
