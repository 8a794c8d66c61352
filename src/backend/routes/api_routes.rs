/**
 * API Route Handlers
 *
 * This module wires every Dreams endpoint to its handler, grouped by
 * module. Paths and methods follow the Dreams HTTP surface exactly; GET
 * routes read their parameters from the query string, the rest from a JSON
 * body.
 *
 * # Authentication
 *
 * Everything except `/auth/register`, `/auth/login` and the two
 * `/auth/passwordreset/...` routes requires `Authorization: Bearer <token>`.
 * Handlers enforce this by taking an `AuthUser` argument.
 */

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::server::state::AppState;
use crate::backend::{admin, auth, channels, dms, messages, other, standup, users};

/// Register, login, logout and password reset
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/passwordreset/request", post(auth::password_reset_request))
        .route("/auth/passwordreset/reset", post(auth::password_reset))
}

pub fn configure_channel_routes(router: Router<AppState>) -> Router<AppState> {
    use channels::handlers::*;

    router
        .route("/channels/create", post(create_channel))
        .route("/channels/list", get(list_channels))
        .route("/channels/listall", get(list_all_channels))
        .route("/channel/details", get(channel_details))
        .route("/channel/messages", get(channel_messages))
        .route("/channel/invite", post(channel_invite))
        .route("/channel/join", post(channel_join))
        .route("/channel/leave", post(channel_leave))
        .route("/channel/addowner", post(channel_add_owner))
        .route("/channel/removeowner", post(channel_remove_owner))
}

pub fn configure_dm_routes(router: Router<AppState>) -> Router<AppState> {
    use dms::handlers::*;

    router
        .route("/dm/create", post(dm_create))
        .route("/dm/list", get(dm_list))
        .route("/dm/details", get(dm_details))
        .route("/dm/messages", get(dm_messages))
        .route("/dm/invite", post(dm_invite))
        .route("/dm/leave", post(dm_leave))
        .route("/dm/remove", delete(dm_remove))
}

pub fn configure_message_routes(router: Router<AppState>) -> Router<AppState> {
    use messages::handlers::*;

    router
        .route("/message/send", post(message_send))
        .route("/message/senddm", post(message_send_dm))
        .route("/message/edit", put(message_edit))
        .route("/message/remove", delete(message_remove))
        .route("/message/share", post(message_share))
        .route("/message/react", post(message_react))
        .route("/message/unreact", post(message_unreact))
        .route("/message/pin", post(message_pin))
        .route("/message/unpin", post(message_unpin))
        .route("/message/sendlater", post(message_send_later))
        .route("/message/sendlaterdm", post(message_send_later_dm))
}

pub fn configure_standup_routes(router: Router<AppState>) -> Router<AppState> {
    use standup::handlers::*;

    router
        .route("/standup/start", post(standup_start))
        .route("/standup/active", get(standup_active))
        .route("/standup/send", post(standup_send))
}

/// Profiles, the user directory, statistics and admin operations
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    use users::handlers::*;

    router
        .route("/user/profile", get(user_profile))
        .route("/user/profile/setname", put(user_set_name))
        .route("/user/profile/setemail", put(user_set_email))
        .route("/user/profile/sethandle", put(user_set_handle))
        .route("/users/all", get(users_all))
        .route("/user/stats", get(user_stats))
        .route("/users/stats", get(dreams_stats))
        .route("/admin/user/remove", delete(admin::handlers::admin_user_remove))
        .route(
            "/admin/userpermission/change",
            post(admin::handlers::admin_permission_change),
        )
}

/// Search and notifications; `DELETE /clear` only when `enable_clear` is set
pub fn configure_other_routes(router: Router<AppState>, enable_clear: bool) -> Router<AppState> {
    let router = router
        .route("/search", get(other::handlers::search))
        .route("/notifications/get", get(other::handlers::notifications_get));

    if enable_clear {
        tracing::warn!("DELETE /clear is enabled");
        router.route("/clear", delete(other::handlers::clear))
    } else {
        router
    }
}
