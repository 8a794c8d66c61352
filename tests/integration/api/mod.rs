//! API integration tests
//!
//! Integration tests for all API endpoints

#[cfg(feature = "ssr")]
mod admin_test;
#[cfg(feature = "ssr")]
mod channel_test;
#[cfg(feature = "ssr")]
mod message_test;
#[cfg(feature = "ssr")]
mod user_test;
