//! Standup HTTP Handlers

use axum::{
    extract::State,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::extract::{ApiJson, ApiQuery};
use crate::backend::standup::state::Standups;
use crate::backend::store::DataStore;
use crate::shared::channel::{
    ChannelQuery, StandupActiveResponse, StandupSendRequest, StandupStartRequest,
    StandupStartResponse,
};
use crate::shared::Empty;

/// `POST /standup/start`
pub async fn standup_start(
    State(store): State<DataStore>,
    State(standups): State<Standups>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<StandupStartRequest>,
) -> Result<Json<StandupStartResponse>, BackendError> {
    let time_finish = standups
        .start(&store, user.u_id, request.channel_id, request.length)
        .await?;
    Ok(Json(StandupStartResponse { time_finish }))
}

/// `GET /standup/active?channel_id=`
pub async fn standup_active(
    State(store): State<DataStore>,
    State(standups): State<Standups>,
    AuthUser(_user): AuthUser,
    ApiQuery(query): ApiQuery<ChannelQuery>,
) -> Result<Json<StandupActiveResponse>, BackendError> {
    Ok(Json(standups.active(&store, query.channel_id).await?))
}

/// `POST /standup/send`
pub async fn standup_send(
    State(store): State<DataStore>,
    State(standups): State<Standups>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<StandupSendRequest>,
) -> Result<Json<Empty>, BackendError> {
    standups
        .send(&store, user.u_id, request.channel_id, &request.message)
        .await?;
    Ok(Json(Empty {}))
}
