//! In-memory test server
//!
//! Builds the real router around a memory-only store, a capturing mailer
//! and the cheapest bcrypt cost, and keeps the state so tests can inspect
//! sent mail and sessions.

use axum_test::TestServer;
use dreams::backend::mail::Mailer;
use dreams::backend::server::{create_app_with_state, AppState, ServerConfig};
use dreams::backend::store::DataStore;

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        data_path: None,
        jwt_secret: "dreams-test-secret".to_string(),
        bcrypt_cost: 4,
        enable_clear: true,
        ..ServerConfig::default()
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(test_config())
}

pub fn spawn_app_with(config: ServerConfig) -> TestApp {
    let state = AppState::new(config, DataStore::in_memory(), Mailer::memory());
    let server = TestServer::new(create_app_with_state(state.clone()))
        .expect("Failed to start test server");
    TestApp { server, state }
}
