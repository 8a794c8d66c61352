//! User HTTP Handlers

use axum::{
    extract::State,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::extract::{ApiJson, ApiQuery};
use crate::backend::store::model::now;
use crate::backend::store::DataStore;
use crate::backend::users::ops;
use crate::shared::stats::{DreamsStatsResponse, UserStatsResponse};
use crate::shared::user::{
    ProfileQuery, ProfileResponse, SetEmailRequest, SetHandleRequest, SetNameRequest,
    UsersAllResponse,
};
use crate::shared::Empty;

/// `GET /user/profile?u_id=`
pub async fn user_profile(
    State(store): State<DataStore>,
    AuthUser(_user): AuthUser,
    ApiQuery(query): ApiQuery<ProfileQuery>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let user = store.read(|document| ops::profile(document, query.u_id)).await?;
    Ok(Json(ProfileResponse { user }))
}

/// `PUT /user/profile/setname`
pub async fn user_set_name(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<SetNameRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| {
            ops::set_name(document, user.u_id, &request.name_first, &request.name_last)
        })
        .await?;
    Ok(Json(Empty {}))
}

/// `PUT /user/profile/setemail`
pub async fn user_set_email(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<SetEmailRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::set_email(document, user.u_id, &request.email))
        .await?;
    Ok(Json(Empty {}))
}

/// `PUT /user/profile/sethandle`
pub async fn user_set_handle(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<SetHandleRequest>,
) -> Result<Json<Empty>, BackendError> {
    store
        .mutate(|document| ops::set_handle(document, user.u_id, &request.handle_str))
        .await?;
    Ok(Json(Empty {}))
}

/// `GET /users/all`
pub async fn users_all(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
) -> Json<UsersAllResponse> {
    let users = store.read(|document| ops::all(document, user.u_id)).await;
    Json(UsersAllResponse { users })
}

/// `GET /user/stats`
pub async fn user_stats(
    State(store): State<DataStore>,
    AuthUser(user): AuthUser,
) -> Json<UserStatsResponse> {
    let user_stats = store
        .read(|document| ops::user_stats(document, user.u_id, now()))
        .await;
    Json(UserStatsResponse { user_stats })
}

/// `GET /users/stats`
pub async fn dreams_stats(
    State(store): State<DataStore>,
    AuthUser(_user): AuthUser,
) -> Json<DreamsStatsResponse> {
    let dreams_stats = store
        .read(|document| ops::dreams_stats(document, now()))
        .await;
    Json(DreamsStatsResponse { dreams_stats })
}
