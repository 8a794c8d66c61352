//! Password Reset Handlers
//!
//! A reset code is generated and stored on the user, then mailed. Using the
//! code sets a new password, consumes the code and ends every session of the
//! user.

use std::sync::Arc;

use axum::{extract::State, response::Json};
use bcrypt::hash;

use crate::backend::auth::sessions::SessionRegistry;
use crate::backend::auth::users::{issue_reset_code, reset_code_owner, reset_password};
use crate::backend::error::BackendError;
use crate::backend::middleware::extract::ApiJson;
use crate::backend::mail::{Mailer, OutgoingMail};
use crate::backend::server::config::ServerConfig;
use crate::backend::store::DataStore;
use crate::shared::user::{PasswordResetConfirm, PasswordResetRequest};
use crate::shared::validation::validate_password;
use crate::shared::Empty;

/// `POST /auth/passwordreset/request`
pub async fn password_reset_request(
    State(store): State<DataStore>,
    State(mailer): State<Mailer>,
    ApiJson(request): ApiJson<PasswordResetRequest>,
) -> Result<Json<Empty>, BackendError> {
    let reset_code = store
        .mutate(|document| issue_reset_code(document, &request.email))
        .await?;
    mailer
        .send(OutgoingMail::password_reset(&request.email, &reset_code))
        .await?;
    tracing::info!("Password reset code issued for {}", request.email);
    Ok(Json(Empty {}))
}

/// `POST /auth/passwordreset/reset`
pub async fn password_reset(
    State(store): State<DataStore>,
    State(sessions): State<SessionRegistry>,
    State(config): State<Arc<ServerConfig>>,
    ApiJson(request): ApiJson<PasswordResetConfirm>,
) -> Result<Json<Empty>, BackendError> {
    validate_password(&request.new_password)?;
    store
        .read(|document| reset_code_owner(document, &request.reset_code))
        .await?;

    let password_hash = hash(&request.new_password, config.bcrypt_cost)?;
    let u_id = store
        .mutate(|document| reset_password(document, &request.reset_code, password_hash))
        .await?;

    let ended = sessions.end_all_for(u_id);
    tracing::info!("User {} reset their password, {} sessions ended", u_id, ended);
    Ok(Json(Empty {}))
}
