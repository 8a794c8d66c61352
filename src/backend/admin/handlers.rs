//! Admin HTTP Handlers

use axum::{extract::State, response::Json};

use crate::backend::admin::ops;
use crate::backend::auth::sessions::SessionRegistry;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::extract::ApiJson;
use crate::backend::store::DataStore;
use crate::shared::user::{AdminRemoveRequest, PermissionChangeRequest};
use crate::shared::Empty;

/// `DELETE /admin/user/remove`
pub async fn admin_user_remove(
    State(store): State<DataStore>,
    State(sessions): State<SessionRegistry>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<AdminRemoveRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::remove_user(document, user.u_id, request.u_id))
        .await?;
    let ended = sessions.end_all_for(request.u_id);
    tracing::debug!("Ended {} sessions of removed user {}", ended, request.u_id);
    Ok(Json(Empty {}))
}

/// `POST /admin/userpermission/change`
pub async fn admin_permission_change(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<PermissionChangeRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| {
            ops::change_permission(document, user.u_id, request.u_id, request.permission_id)
        })
        .await?;
    Ok(Json(Empty {}))
}
