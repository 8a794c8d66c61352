//! Direct Messages Module
//!
//! Small closed conversations between a fixed creator and invited members.
//! Only the creator can remove a DM; any member can invite or leave.

/// Store operations
pub mod ops;

/// HTTP handlers
pub mod handlers;
