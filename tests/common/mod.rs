//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory test server
//! - Registration and login helpers
//! - Custom assertion macros

#[cfg(feature = "ssr")]
pub mod auth_helpers;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "ssr")]
pub use auth_helpers::*;
#[cfg(feature = "ssr")]
pub use server::*;
