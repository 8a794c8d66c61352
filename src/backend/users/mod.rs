//! Users Module
//!
//! Profile lookups and edits, the user directory, and activity statistics.

pub mod handlers;
pub mod ops;
