//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - the [`AuthUser`] extractor that guards every route except
//!   register, login, password reset and the health check
//! - **`extract`** - JSON body and query extractors that reject with the
//!   standard error body

pub mod auth;
pub mod extract;

pub use auth::{bearer_token, AuthUser, AuthenticatedUser};
pub use extract::{ApiJson, ApiQuery};
