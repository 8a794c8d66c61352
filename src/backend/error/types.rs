//! Backend Error Types
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Error Categories
//!
//! ## Request Errors
//!
//! - `InputError` - invalid ids, lengths, formats or duplicate state (400)
//! - `AccessError` - the caller lacks membership or permission (403)
//! - `Unauthorized` - missing, malformed, expired or logged-out token (401)
//! - `Rejected` - the body or query could not be extracted, or no route
//!   matched (status taken from the rejection)
//!
//! ## Internal Errors
//!
//! Persistence I/O, serialization, password hashing and mail delivery
//! failures all map to 500.

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// Each variant maps to exactly one HTTP status code through
/// [`BackendError::status_code`].
///
/// # Usage
///
/// ```rust
/// use dreams::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::input("Channel does not exist");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::access("You are not a member of this channel");
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Invalid input (unknown id, bad length, duplicate state)
    #[error("Input error: {message}")]
    InputError {
        /// Human-readable error message
        message: String,
    },

    /// The caller is authenticated but not allowed to do this
    #[error("Access error: {message}")]
    AccessError {
        /// Human-readable error message
        message: String,
    },

    /// The request carries no usable session
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// The request was turned away before reaching an operation
    #[error("Rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The store snapshot could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// Field validation failed
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Token encoding or decoding failed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failed
    #[error("Hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Outgoing mail could not be built or delivered
    #[error("Mail error: {message}")]
    MailError {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::InputError {
            message: message.into(),
        }
    }

    /// Create a new access error
    pub fn access(message: impl Into<String>) -> Self {
        Self::AccessError {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a rejection with an explicit status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Create a new mail error
    pub fn mail(message: impl Into<String>) -> Self {
        Self::MailError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InputError` - 400 Bad Request
    /// - `AccessError` - 403 Forbidden
    /// - `Unauthorized`, `Token` - 401 Unauthorized
    /// - `Rejected` - Uses the status code from the error
    /// - `SharedError` - 400
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InputError { .. } => StatusCode::BAD_REQUEST,
            Self::AccessError { .. } => StatusCode::FORBIDDEN,
            Self::Unauthorized { .. } | Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::Rejected { status, .. } => *status,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_)
            | Self::SerializationError(_)
            | Self::Hash(_)
            | Self::MailError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::InputError { message }
            | Self::AccessError { message }
            | Self::Unauthorized { message }
            | Self::Rejected { message, .. }
            | Self::MailError { message } => message.clone(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}
