//! Authentication Module
//!
//! Registration, login, logout and password reset, plus the session
//! registry that makes bearer tokens revocable.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Account operations on the store document
//! ├── sessions.rs     - JWT tokens and the session registry
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: details validated → user stored → session started → token returned
//! 2. **Login**: password verified → new session started → token returned
//! 3. **Logout**: the token's session is ended
//! 4. **Reset**: code mailed → code + new password → all sessions ended

/// Account operations
pub mod users;

/// JWT token generation and session tracking
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, password_reset, password_reset_request, register};
pub use sessions::{SessionRegistry, SessionToken, TokenKeys};
