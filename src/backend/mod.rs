//! Backend Module
//!
//! The Dreams server: an Axum HTTP API over a single in-process document
//! store, with JWT-backed sessions, timed standups and delayed messages.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state and initialization
//! ├── routes/         - Route configuration
//! ├── middleware/     - Bearer token extractor
//! ├── error/          - Error types and HTTP conversion
//! ├── store/          - Document model and snapshot persistence
//! ├── mail/           - Password reset mail delivery
//! ├── auth/           - Register, login, logout, password reset
//! ├── channels/       - Channel membership and history
//! ├── dms/            - Direct messages
//! ├── messages/       - Sending, editing, reacting, pinning, sendlater
//! ├── standup/        - Timed standups
//! ├── users/          - Profiles and statistics
//! ├── admin/          - Dreams owner operations
//! └── other/          - Search, notifications and reset
//! ```
//!
//! # Layering
//!
//! Each feature module splits into `ops` (synchronous functions over a
//! `&Document` or `&mut Document`, returning `BackendError`) and `handlers`
//! (Axum extractors around a store read or mutation). Ops hold all the
//! rules and are unit tested directly; handlers stay thin.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Document store
pub mod store;

/// Outgoing mail
pub mod mail;

/// Authentication and sessions
pub mod auth;

pub mod channels;

pub mod dms;

pub mod messages;

pub mod standup;

pub mod users;

pub mod admin;

pub mod other;

pub use error::BackendError;
pub use server::create_app;
