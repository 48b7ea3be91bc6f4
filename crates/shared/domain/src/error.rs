//! Domain-level errors.
//!
//! These errors represent business rule violations and failures reported by
//! the deletion gateway. They are independent of any storage backend.

use thiserror::Error;

use crate::constants::LOGIN_NULL_ARGUMENT_MESSAGE;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was missing or malformed
    #[error("{0}")]
    InvalidArgument(String),

    /// Two records share an id where a unique key is required
    #[error("Duplicate user id: {id}")]
    DuplicateKey { id: i32 },
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DomainError::InvalidArgument(msg.into())
    }

    /// The error returned by login when a credential is absent
    pub fn null_credentials() -> Self {
        DomainError::InvalidArgument(LOGIN_NULL_ARGUMENT_MESSAGE.to_string())
    }

    /// Create a duplicate key error for the given id
    pub fn duplicate_key(id: i32) -> Self {
        DomainError::DuplicateKey { id }
    }
}

/// Failures raised by a deletion gateway.
///
/// The directory hands these back to its caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No backing store is reachable
    #[error("Deletion backend unavailable: {0}")]
    Unavailable(String),

    /// The backing store rejected or failed the request
    #[error("Deletion backend error: {0}")]
    Backend(String),
}

impl GatewayError {
    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        GatewayError::Unavailable(msg.into())
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        GatewayError::Backend(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
