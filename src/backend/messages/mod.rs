//! Messages Module
//!
//! Sending, editing, removing, sharing, reacting to and pinning messages in
//! channels and DMs, plus delayed delivery.
//!
//! # Module Structure
//!
//! ```text
//! messages/
//! ├── mod.rs        - Module exports and documentation
//! ├── ops.rs        - Store operations
//! ├── scheduler.rs  - Timer tasks for sendlater / sendlaterdm
//! └── handlers.rs   - HTTP handlers
//! ```
//!
//! # Identifiers
//!
//! Message ids come from one counter shared by channels and DMs. A delayed
//! message reserves its id when scheduled, so ids are unique but not
//! necessarily in delivery order.

/// Store operations
pub mod ops;

/// Delayed delivery
pub mod scheduler;

/// HTTP handlers
pub mod handlers;

pub use scheduler::Scheduler;
