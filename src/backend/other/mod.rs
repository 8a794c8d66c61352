//! Other Module
//!
//! Message search, notification feed and the test-only reset route.

pub mod handlers;
pub mod ops;
