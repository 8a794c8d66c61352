//! Channel HTTP Handlers
//!
//! Thin adapters from JSON bodies and query strings to [`super::ops`].

use axum::{
    extract::State,
    response::Json,
};

use crate::backend::channels::ops;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::extract::{ApiJson, ApiQuery};
use crate::backend::store::DataStore;
use crate::shared::channel::{
    ChannelCreateRequest, ChannelCreateResponse, ChannelDetails, ChannelIdRequest,
    ChannelMemberRequest, ChannelMessagesQuery, ChannelQuery, ChannelsListResponse,
};
use crate::shared::message::MessagesPage;
use crate::shared::Empty;

/// `POST /channels/create`
pub async fn create_channel(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<ChannelCreateRequest>,
) -> Result<Json<ChannelCreateResponse>, BackendError> {
    let channel_id = store
        .mutate(|document| ops::create(document, user.u_id, &request.name, request.is_public))
        .await?;
    Ok(Json(ChannelCreateResponse { channel_id }))
}

/// `GET /channels/list`
pub async fn list_channels(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
) -> Json<ChannelsListResponse> {
    let channels = store.read(|document| ops::list(document, user.u_id)).await;
    Json(ChannelsListResponse { channels })
}

/// `GET /channels/listall`
pub async fn list_all_channels(
    State(store): State<DataStore>,
    AuthUser(_user): AuthUser,
) -> Json<ChannelsListResponse> {
    let channels = store.read(ops::list_all).await;
    Json(ChannelsListResponse { channels })
}

/// `GET /channel/details?channel_id=`
pub async fn channel_details(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiQuery(query): ApiQuery<ChannelQuery>,
) -> Result<Json<ChannelDetails>, BackendError> {
    let details = store
        .read(|document| ops::details(document, user.u_id, query.channel_id))
        .await?;
    Ok(Json(details))
}

/// `POST /channel/invite`
pub async fn channel_invite(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<ChannelMemberRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::invite(document, user.u_id, request.channel_id, request.u_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `POST /channel/join`
pub async fn channel_join(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<ChannelIdRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::join(document, user.u_id, request.channel_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `POST /channel/leave`
pub async fn channel_leave(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<ChannelIdRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::leave(document, user.u_id, request.channel_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `POST /channel/addowner`
pub async fn channel_add_owner(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<ChannelMemberRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::add_owner(document, user.u_id, request.channel_id, request.u_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `POST /channel/removeowner`
pub async fn channel_remove_owner(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<ChannelMemberRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| {
            ops::remove_owner(document, user.u_id, request.channel_id, request.u_id)
        })
        .await?;
    Ok(Json(Empty {}))
}

/// `GET /channel/messages?channel_id=&start=`
pub async fn channel_messages(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiQuery(query): ApiQuery<ChannelMessagesQuery>,
) -> Result<Json<MessagesPage>, BackendError> {
    let page = store
        .read(|document| ops::messages(document, user.u_id, query.channel_id, query.start))
        .await?;
    Ok(Json(page))
}
