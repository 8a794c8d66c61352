/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` logs every request and response through `tracing`
 * - `CorsLayer::permissive()` so browser front ends on other origins can
 *   call the API
 */

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{
    configure_auth_routes, configure_channel_routes, configure_dm_routes,
    configure_message_routes, configure_other_routes, configure_standup_routes,
    configure_user_routes,
};
use crate::backend::server::state::AppState;

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> BackendError {
    BackendError::rejected(axum::http::StatusCode::NOT_FOUND, "No such route")
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared by every handler
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let enable_clear = app_state.config.enable_clear;

    let router = Router::new().route("/health", get(health));
    let router = configure_auth_routes(router);
    let router = configure_channel_routes(router);
    let router = configure_dm_routes(router);
    let router = configure_message_routes(router);
    let router = configure_standup_routes(router);
    let router = configure_user_routes(router);
    let router = configure_other_routes(router, enable_clear);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
