//! Shared Module
//!
//! This module contains the wire types of the Dreams API together with the
//! validation rules that do not depend on server state. Everything here is
//! plain `serde` data and compiles without the `ssr` feature, so a client
//! can depend on it without pulling in the server stack.
//!
//! # Overview
//!
//! - **`user`** - Auth, profile and admin bodies; `Permission`
//! - **`channel`** - Channel and standup bodies
//! - **`dm`** - Direct message bodies
//! - **`message`** - Message bodies, viewer-specific message view, paging
//! - **`stats`** - Notifications and activity statistics
//! - **`validation`** - Field checks (email, names, handles, lengths)
//! - **`error`** - `SharedError`

/// Shared error types
pub mod error;

/// Field validation rules
pub mod validation;

/// User, auth and admin types
pub mod user;

/// Channel and standup types
pub mod channel;

/// Direct message types
pub mod dm;

/// Message types
pub mod message;

/// Notification and statistics types
pub mod stats;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use user::{Empty, Permission, UserId, UserProfile};
pub use channel::ChannelId;
pub use dm::DmId;
pub use message::{MessageId, MessageView};
pub use stats::Notification;
