//! DM HTTP Handlers

use axum::{
    extract::State,
    response::Json,
};

use crate::backend::dms::ops;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::extract::{ApiJson, ApiQuery};
use crate::backend::store::DataStore;
use crate::shared::dm::{
    DmCreateRequest, DmCreateResponse, DmDetails, DmIdRequest, DmInviteRequest, DmListResponse,
    DmMessagesQuery, DmQuery,
};
use crate::shared::message::MessagesPage;
use crate::shared::Empty;

/// `POST /dm/create`
pub async fn dm_create(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<DmCreateRequest>,
) -> Result<Json<DmCreateResponse>, BackendError> {
    let (dm_id, dm_name) = store
        .mutate(|document| ops::create(document, user.u_id, &request.u_ids))
        .await?;
    Ok(Json(DmCreateResponse { dm_id, dm_name }))
}

/// `GET /dm/list`
pub async fn dm_list(State(store): State<DataStore>, AuthUser(user): AuthUser) -> Json<DmListResponse> {
    let dms = store.read(|document| ops::list(document, user.u_id)).await;
    Json(DmListResponse { dms })
}

/// `GET /dm/details?dm_id=`
pub async fn dm_details(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiQuery(query): ApiQuery<DmQuery>,
) -> Result<Json<DmDetails>, BackendError> {
    let details = store
        .read(|document| ops::details(document, user.u_id, query.dm_id))
        .await?;
    Ok(Json(details))
}

/// `POST /dm/invite`
pub async fn dm_invite(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<DmInviteRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::invite(document, user.u_id, request.dm_id, request.u_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `POST /dm/leave`
pub async fn dm_leave(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<DmIdRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::leave(document, user.u_id, request.dm_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `DELETE /dm/remove`
pub async fn dm_remove(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<DmIdRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::remove(document, user.u_id, request.dm_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `GET /dm/messages?dm_id=&start=`
pub async fn dm_messages(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiQuery(query): ApiQuery<DmMessagesQuery>,
) -> Result<Json<MessagesPage>, BackendError> {
    let page = store
        .read(|document| ops::messages(document, user.u_id, query.dm_id, query.start))
        .await?;
    Ok(Json(page))
}
