/**
 * Login and Logout Handlers
 *
 * Every successful login opens a new session; earlier sessions of the same
 * user stay valid until they log out.
 */

use axum::{extract::State, http::HeaderMap, response::Json};
use bcrypt::verify;

use crate::backend::auth::sessions::{SessionRegistry, TokenKeys};
use crate::backend::auth::users::login_candidate;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::bearer_token;
use crate::backend::middleware::extract::ApiJson;
use crate::backend::store::DataStore;
use crate::shared::user::{AuthResponse, LoginRequest, LogoutResponse};

/// `POST /auth/login`
///
/// # Errors
///
/// * `400 Bad Request` - bad email format, unknown or removed account, or
///   wrong password
pub async fn login(
    State(store): State<DataStore>,
    State(sessions): State<SessionRegistry>,
    State(tokens): State<TokenKeys>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for email: {}", request.email);

    let (u_id, password_hash) = store
        .read(|document| login_candidate(document, &request.email))
        .await?;

    if !verify(&request.password, &password_hash)? {
        tracing::warn!("Invalid password for user {}", u_id);
        return Err(BackendError::input("Incorrect password"));
    }

    let expires_at = tokens.expires_at();
    let session_id = sessions.start(u_id, expires_at);
    let token = tokens.issue(u_id, session_id, expires_at)?;

    tracing::info!("User {} logged in", u_id);
    Ok(Json(AuthResponse {
        token,
        auth_user_id: u_id,
    }))
}

/// `POST /auth/logout`
///
/// Reports `is_success: false` for a token that verifies poorly or whose
/// session already ended; only a missing header is rejected.
pub async fn logout(
    State(sessions): State<SessionRegistry>,
    State(tokens): State<TokenKeys>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, BackendError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| BackendError::unauthorized("Missing bearer token"))?;

    let is_success = match tokens.verify(token) {
        Ok(session) => sessions.end(&session),
        Err(e) => {
            tracing::warn!("Logout with invalid token: {}", e);
            false
        }
    };
    Ok(Json(LogoutResponse { is_success }))
}
