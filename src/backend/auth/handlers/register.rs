/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate email format, password length and name lengths
 * 2. Hash password using bcrypt (outside the store lock)
 * 3. Add the user, rejecting a taken email, and pick a handle
 * 4. Start a session and return its token
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};
use bcrypt::hash;

use crate::backend::auth::sessions::{SessionRegistry, TokenKeys};
use crate::backend::auth::users::{register as add_user, validate_registration};
use crate::backend::error::BackendError;
use crate::backend::middleware::extract::ApiJson;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::DataStore;
use crate::shared::user::{AuthResponse, RegisterRequest};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid email, short password, bad name length or
///   an email that is already registered
/// * `500 Internal Server Error` - hashing, persistence or token creation failed
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ada@example.com",
///   "password": "password123",
///   "name_first": "Ada",
///   "name_last": "Lovelace"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "auth_user_id": 0 }
/// ```
pub async fn register(
    State(store): State<DataStore>,
    State(sessions): State<SessionRegistry>,
    State(tokens): State<TokenKeys>,
    State(config): State<Arc<ServerConfig>>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Register request for email: {}", request.email);
    validate_registration(&request)?;

    let password_hash = hash(&request.password, config.bcrypt_cost)?;
    let u_id = store
        .mutate(|document| add_user(document, &request, password_hash))
        .await?;

    let expires_at = tokens.expires_at();
    let session_id = sessions.start(u_id, expires_at);
    let token = tokens.issue(u_id, session_id, expires_at)?;

    tracing::info!("User {} registered ({})", u_id, request.email);
    Ok(Json(AuthResponse {
        token,
        auth_user_id: u_id,
    }))
}
