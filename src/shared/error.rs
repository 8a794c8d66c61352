//! Shared Error Types
//!
//! This module defines error types that are shared between the server and any
//! client of the Dreams API. These errors represent input problems that can be
//! detected without touching server state.
//!
//! # Error Categories
//!
//! - `ValidationError` - Field validation failures (lengths, formats)
//!
//! # Usage
//!
//! ```rust
//! use dreams::shared::error::SharedError;
//!
//! let error = SharedError::validation("password", "Password must be at least 6 characters");
//! assert!(error.to_string().contains("password"));
//! ```
use thiserror::Error;

/// Shared error types that can occur on either side of the API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
