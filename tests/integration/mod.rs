//! Integration tests driving the full router

pub mod api;
