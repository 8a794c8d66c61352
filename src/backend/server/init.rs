/**
 * Server Initialization
 *
 * This module builds the application state from configuration and turns it
 * into a ready-to-serve router.
 *
 * # Initialization Process
 *
 * 1. Open the store snapshot (or start in memory)
 * 2. Build the mailer from the SMTP settings
 * 3. Create sessions, standups and the sendlater scheduler
 * 4. Create and configure the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the store snapshot exists but cannot be read, or the SMTP
/// settings are invalid.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing Dreams backend server");

    match &config.data_path {
        Some(path) => tracing::info!("Persisting store to {}", path.display()),
        None => tracing::warn!("No data path configured, store is memory only"),
    }

    let app_state = AppState::from_config(config).await?;
    let users = app_state.store.read(|document| document.users.len()).await;
    tracing::info!("Store loaded with {} users", users);

    Ok(create_app_with_state(app_state))
}

/// Create the router around an existing state
///
/// Tests use this to keep a handle on the state they pass in.
pub fn create_app_with_state(app_state: AppState) -> Router<()> {
    create_router(app_state)
}
