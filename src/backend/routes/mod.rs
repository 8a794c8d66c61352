//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, layers, health check and fallback
//! └── api_routes.rs   - Dreams endpoints grouped by module
//! ```

/// Main router creation
pub mod router;

/// Dreams endpoint wiring
pub mod api_routes;

pub use router::create_router;
