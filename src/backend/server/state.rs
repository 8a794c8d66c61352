/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The Dreams document store
 * - Session registry and token keys
 * - Running standups and scheduled messages
 * - The outgoing mailer and server configuration
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`:
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use dreams::backend::store::DataStore;
 *
 * async fn handler(State(store): State<DataStore>) {
 *     let users = store.read(|document| document.users.len()).await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::{SessionRegistry, TokenKeys};
use crate::backend::error::BackendError;
use crate::backend::mail::Mailer;
use crate::backend::messages::Scheduler;
use crate::backend::server::config::ServerConfig;
use crate::backend::standup::Standups;
use crate::backend::store::DataStore;

/// Application state shared by every handler
///
/// Every field is a cheap handle over shared data, so cloning the state
/// per request is fine.
#[derive(Clone)]
pub struct AppState {
    /// The Dreams document
    pub store: DataStore,

    /// Sessions that tokens may refer to
    pub sessions: SessionRegistry,

    /// JWT signing keys
    pub tokens: TokenKeys,

    /// Running standups, one per channel at most
    pub standups: Standups,

    /// Pending `sendlater` deliveries
    pub scheduler: Scheduler,

    /// Delivers password reset codes
    pub mailer: Mailer,

    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state from configuration, opening the store snapshot if one is
    /// configured
    pub async fn from_config(config: ServerConfig) -> Result<Self, BackendError> {
        let store = match &config.data_path {
            Some(path) => DataStore::open(path).await?,
            None => DataStore::in_memory(),
        };
        let mailer = Mailer::from_config(config.smtp.as_ref())?;
        Ok(Self::new(config, store, mailer))
    }

    pub fn new(config: ServerConfig, store: DataStore, mailer: Mailer) -> Self {
        Self {
            store,
            sessions: SessionRegistry::new(),
            tokens: TokenKeys::new(&config.jwt_secret, config.token_ttl_secs),
            standups: Standups::new(),
            scheduler: Scheduler::new(),
            mailer,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for DataStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for SessionRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Standups {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.standups.clone()
    }
}

impl FromRef<AppState> for Scheduler {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.scheduler.clone()
    }
}

impl FromRef<AppState> for Mailer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
