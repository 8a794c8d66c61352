//! Search, Notification and Reset HTTP Handlers

use axum::{
    extract::State,
    response::Json,
};

use crate::backend::auth::sessions::SessionRegistry;
use crate::backend::error::BackendError;
use crate::backend::messages::Scheduler;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::extract::ApiQuery;
use crate::backend::other::ops;
use crate::backend::standup::Standups;
use crate::backend::store::DataStore;
use crate::shared::message::{SearchQuery, SearchResponse};
use crate::shared::stats::NotificationsResponse;
use crate::shared::Empty;

/// `GET /search?query_str=`
pub async fn search(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<SearchResponse>, BackendError> {
    let messages = store
        .read(|document| ops::search(document, user.u_id, &query.query_str))
        .await?;
    Ok(Json(SearchResponse { messages }))
}

/// `GET /notifications/get`
pub async fn notifications_get(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
) -> Json<NotificationsResponse> {
    let notifications = store
        .read(|document| ops::notifications(document, user.u_id))
        .await;
    Json(NotificationsResponse { notifications })
}

/// `DELETE /clear`
///
/// Wipes the store and every piece of in-memory state. Only routed when
/// `enable_clear` is set.
pub async fn clear(
    State(store): State<DataStore>,
    State(sessions): State<SessionRegistry>,
    State(standups): State<Standups>,
    State(scheduler): State<Scheduler>,
) -> Result<Json<Empty>, BackendError> {
    standups.clear();
    scheduler.cancel_all();
    sessions.clear();
    store.reset().await?;
    tracing::warn!("All Dreams data cleared");
    Ok(Json(Empty {}))
}
