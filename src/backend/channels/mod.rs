//! Channels Module
//!
//! Public and private group conversations: creation, listing, membership
//! and ownership, and paginated history.
//!
//! # Module Structure
//!
//! ```text
//! channels/
//! ├── mod.rs       - Module exports and documentation
//! ├── ops.rs       - Store operations (sync, unit tested)
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! # Permissions
//!
//! Any member may invite. Managing owners requires being a channel owner,
//! or a Dreams owner who is also a member. Dreams owners may join private
//! channels.

/// Store operations
pub mod ops;

/// HTTP handlers
pub mod handlers;
