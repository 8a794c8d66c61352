//! Dreams - Main Library
//!
//! Dreams is a team messaging backend: users register and log in, talk in
//! public or private channels and in direct messages (DMs), react to and pin
//! messages, schedule messages for later, run timed standups, and search
//! their history. Dreams owners can remove users and grant ownership.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and validation shared by the server and any
//!   client
//!   - Request and response bodies for every route
//!   - Field validation (email, names, handles, lengths)
//!   - `SharedError`
//!
//! - **`backend`** - The Axum server (only compiled with the `ssr` feature)
//!   - Document store with JSON snapshot persistence
//!   - JWT sessions, bcrypt passwords, SMTP reset mail
//!   - Channel, DM, message, standup, user and admin operations
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend and its dependencies
//!
//! # Usage
//!
//! ```rust,no_run
//! use dreams::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `backend::BackendError` for everything the server returns; it renders
//!   as `{"error": ..., "status": ...}` with 400 for input errors, 403 for
//!   access errors and 401 for bad tokens

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
