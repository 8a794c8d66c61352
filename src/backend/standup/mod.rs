//! Standup Module
//!
//! Timed collection of status lines in a channel, posted as a single
//! message when the standup ends.

/// Running standups and their timers
pub mod state;

/// HTTP handlers
pub mod handlers;

pub use state::Standups;
