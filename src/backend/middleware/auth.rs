/**
 * Authentication Extractor
 *
 * Protected handlers take an [`AuthUser`] argument. Extraction:
 * 1. Reads the `Authorization: Bearer <token>` header
 * 2. Verifies the JWT signature and expiry
 * 3. Checks that the token's session is still active
 * 4. Checks that the user still exists and has not been removed
 *
 * Any failure rejects the request with 401 before the handler runs.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::backend::auth::sessions::SessionToken;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::UserId;

/// The caller of a protected route
#[derive(Clone, Copy, Debug)]
pub struct AuthenticatedUser {
    pub u_id: UserId,
    /// The session the request was made with
    pub session: SessionToken,
}

/// Axum extractor for authenticated user
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

/// The token from an `Authorization: Bearer` header, if present
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolve a raw token to the user it belongs to
pub async fn authenticate(state: &AppState, token: &str) -> Result<AuthenticatedUser, BackendError> {
    let session = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthorized("Invalid token")
    })?;

    if !state.sessions.is_active(&session) {
        tracing::warn!("Token for user {} refers to an ended session", session.u_id);
        return Err(BackendError::unauthorized("Session has ended"));
    }

    let exists = state
        .store
        .read(|document| document.active_user(session.u_id).is_ok())
        .await;
    if !exists {
        tracing::warn!("Token for user {} refers to a missing user", session.u_id);
        return Err(BackendError::unauthorized("User no longer exists"));
    }

    Ok(AuthenticatedUser {
        u_id: session.u_id,
        session,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            BackendError::unauthorized("Missing bearer token")
        })?;
        authenticate(state, token).await.map(AuthUser)
    }
}
