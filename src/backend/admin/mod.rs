//! Admin Module
//!
//! Operations reserved for Dreams owners: removing users and changing
//! global permissions.

pub mod handlers;
pub mod ops;
