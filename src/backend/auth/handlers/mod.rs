//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs            - Module exports
//! ├── register.rs       - POST /auth/register
//! ├── login.rs          - POST /auth/login, POST /auth/logout
//! └── password_reset.rs - POST /auth/passwordreset/{request,reset}
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt at the configured cost
//! - Tokens are HS256 JWTs tied to a server-side session, so logout and
//!   password reset revoke them

/// Register handler
pub mod register;

/// Login and logout handlers
pub mod login;

/// Password reset handlers
pub mod password_reset;

pub use login::{login, logout};
pub use password_reset::{password_reset, password_reset_request};
pub use register::register;
