//! Server Module
//!
//! Server initialization, configuration and shared application state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Layered configuration (defaults, TOML, environment)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds the document store, session registry, token keys,
//! running standups, the sendlater scheduler and the mailer. Handlers pull
//! out the pieces they need through `FromRef`.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::{create_app, create_app_with_state};
pub use state::AppState;
