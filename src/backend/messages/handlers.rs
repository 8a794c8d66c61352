//! Message HTTP Handlers

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::messages::ops;
use crate::backend::messages::scheduler::{ScheduledMessage, Scheduler};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::extract::ApiJson;
use crate::backend::store::model::now;
use crate::backend::store::{DataStore, Target};
use crate::shared::message::{
    EditRequest, MessageIdRequest, MessageIdResponse, ReactRequest, SendDmRequest,
    SendLaterDmRequest, SendLaterRequest, SendRequest, ShareRequest, ShareResponse,
};
use crate::shared::{Empty, UserId};

/// `POST /message/send`
pub async fn message_send(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<SendRequest>,
) -> Result<Json<MessageIdResponse>, BackendError> {
    let message_id = store
        .mutate(|document| ops::send(document, user.u_id, request.channel_id, &request.message, now()))
        .await?;
    Ok(Json(MessageIdResponse { message_id }))
}

/// `POST /message/senddm`
pub async fn message_send_dm(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<SendDmRequest>,
) -> Result<Json<MessageIdResponse>, BackendError> {
    let message_id = store
        .mutate(|document| ops::send_dm(document, user.u_id, request.dm_id, &request.message, now()))
        .await?;
    Ok(Json(MessageIdResponse { message_id }))
}

/// `PUT /message/edit`
pub async fn message_edit(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<EditRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::edit(document, user.u_id, request.message_id, &request.message))
        .await?;
    Ok(Json(Empty {}))
}

/// `DELETE /message/remove`
pub async fn message_remove(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<MessageIdRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::remove(document, user.u_id, request.message_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `POST /message/share`
pub async fn message_share(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<ShareRequest>,
) -> Result<Json<ShareResponse>, BackendError> {
    let shared_message_id = store
        .mutate(|document| {
            ops::share(
                document,
                user.u_id,
                request.og_message_id,
                &request.message,
                request.channel_id,
                request.dm_id,
                now(),
            )
        })
        .await?;
    Ok(Json(ShareResponse { shared_message_id }))
}

/// `POST /message/react`
pub async fn message_react(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<ReactRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::react(document, user.u_id, request.message_id, request.react_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `POST /message/unreact`
pub async fn message_unreact(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<ReactRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::unreact(document, user.u_id, request.message_id, request.react_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `POST /message/pin`
pub async fn message_pin(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<MessageIdRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::pin(document, user.u_id, request.message_id))
        .await?;
    Ok(Json(Empty {}))
}

/// `POST /message/unpin`
pub async fn message_unpin(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<MessageIdRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::unpin(document, user.u_id, request.message_id))
        .await?;
    Ok(Json(Empty {}))
}

/// Reserve an id, hand the message to the scheduler and wait for delivery
async fn send_later(
    store: DataStore,
    scheduler: &Scheduler,
    u_id: UserId,
    target: Target,
    text: String,
    time_sent: i64,
) -> Result<Json<MessageIdResponse>, BackendError> {
    let message_id = store
        .mutate(|document| ops::reserve_later(document, u_id, target, &text, time_sent, now()))
        .await?;
    let delivery = scheduler.schedule(
        store,
        ScheduledMessage {
            message_id,
            u_id,
            target,
            text,
            time_sent,
        },
    );
    delivery
        .await
        .map_err(|_| BackendError::input("The scheduled message was cancelled"))??;
    Ok(Json(MessageIdResponse { message_id }))
}

/// `POST /message/sendlater`
pub async fn message_send_later(
    State(store): State<DataStore>,
    State(scheduler): State<Scheduler>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<SendLaterRequest>,
) -> Result<Json<MessageIdResponse>, BackendError> {
    send_later(
        store,
        &scheduler,
        user.u_id,
        Target::Channel(request.channel_id),
        request.message,
        request.time_sent,
    )
    .await
}

/// `POST /message/sendlaterdm`
pub async fn message_send_later_dm(
    State(store): State<DataStore>,
    State(scheduler): State<Scheduler>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<SendLaterDmRequest>,
) -> Result<Json<MessageIdResponse>, BackendError> {
    send_later(
        store,
        &scheduler,
        user.u_id,
        Target::Dm(request.dm_id),
        request.message,
        request.time_sent,
    )
    .await
}
