//! Admin API integration tests

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::assert_status;
    use crate::common::{create_channel, register, register_users, send_message, spawn_app, TEST_PASSWORD};

    #[tokio::test]
    async fn test_remove_user() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;
        let channel_id = create_channel(&app.server, &users[1], "general", true).await;
        send_message(&app.server, &users[1], channel_id, "goodbye").await;
        app.server
            .post("/channel/join")
            .authorization_bearer(&users[0].token)
            .json(&json!({"channel_id": channel_id}))
            .await;

        let response = app
            .server
            .delete("/admin/user/remove")
            .authorization_bearer(&users[1].token)
            .json(&json!({"u_id": users[0].u_id}))
            .await;
        assert_status!(response, StatusCode::FORBIDDEN);

        let response = app
            .server
            .delete("/admin/user/remove")
            .authorization_bearer(&users[0].token)
            .json(&json!({"u_id": users[1].u_id}))
            .await;
        assert_status!(response, StatusCode::OK);

        // the removed user's token is dead and login is refused
        let response = app
            .server
            .get("/channels/list")
            .authorization_bearer(&users[1].token)
            .await;
        assert_status!(response, StatusCode::UNAUTHORIZED);
        let response = app
            .server
            .post("/auth/login")
            .json(&json!({"email": users[1].email, "password": TEST_PASSWORD}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);

        let profile: Value = app
            .server
            .get("/user/profile")
            .authorization_bearer(&users[0].token)
            .add_query_param("u_id", users[1].u_id)
            .await
            .json();
        assert_eq!(profile["user"]["name_first"], "Removed user");
        assert_eq!(profile["user"]["name_last"], "Removed user");

        let page: Value = app
            .server
            .get("/channel/messages")
            .authorization_bearer(&users[0].token)
            .add_query_param("channel_id", channel_id)
            .add_query_param("start", 0)
            .await
            .json();
        assert_eq!(page["messages"][0]["message"], "Removed user");

        let all: Value = app
            .server
            .get("/users/all")
            .authorization_bearer(&users[0].token)
            .await
            .json();
        assert_eq!(all["users"], json!([]));

        // the email is free again
        let again = register(&app.server, &users[1].email, "New", "User").await;
        assert_eq!(again.u_id, 2);
    }

    #[tokio::test]
    async fn test_cannot_remove_only_owner() {
        let app = spawn_app();
        let users = register_users(&app.server, 1).await;
        let response = app
            .server
            .delete("/admin/user/remove")
            .authorization_bearer(&users[0].token)
            .json(&json!({"u_id": users[0].u_id}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_permission_change() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;

        let response = app
            .server
            .post("/admin/userpermission/change")
            .authorization_bearer(&users[1].token)
            .json(&json!({"u_id": users[1].u_id, "permission_id": 1}))
            .await;
        assert_status!(response, StatusCode::FORBIDDEN);

        for body in [
            json!({"u_id": users[1].u_id, "permission_id": 3}),
            json!({"u_id": 99, "permission_id": 1}),
            json!({"u_id": users[0].u_id, "permission_id": 2}),
        ] {
            let response = app
                .server
                .post("/admin/userpermission/change")
                .authorization_bearer(&users[0].token)
                .json(&body)
                .await;
            assert_status!(response, StatusCode::BAD_REQUEST);
        }

        let response = app
            .server
            .post("/admin/userpermission/change")
            .authorization_bearer(&users[0].token)
            .json(&json!({"u_id": users[1].u_id, "permission_id": 1}))
            .await;
        assert_status!(response, StatusCode::OK);

        // the new owner can now demote the first one
        let response = app
            .server
            .post("/admin/userpermission/change")
            .authorization_bearer(&users[1].token)
            .json(&json!({"u_id": users[0].u_id, "permission_id": 2}))
            .await;
        assert_status!(response, StatusCode::OK);
    }
}
