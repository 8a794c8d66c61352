//! Message API integration tests
//!
//! Editing, removal, sharing, reactions, pins, tags and sendlater.

#[cfg(feature = "ssr")]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::assert_status;
    use crate::common::{create_channel, register_users, send_message, spawn_app, TestUser};

    async fn page(server: &TestServer, user: &TestUser, channel_id: u64) -> Value {
        server
            .get("/channel/messages")
            .authorization_bearer(&user.token)
            .add_query_param("channel_id", channel_id)
            .add_query_param("start", 0)
            .await
            .json()
    }

    async fn join(server: &TestServer, user: &TestUser, channel_id: u64) {
        let response = server
            .post("/channel/join")
            .authorization_bearer(&user.token)
            .json(&json!({"channel_id": channel_id}))
            .await;
        assert_status!(response, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_send_validation() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;

        let response = app
            .server
            .post("/message/send")
            .authorization_bearer(&users[0].token)
            .json(&json!({"channel_id": channel_id, "message": "x".repeat(1001)}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);

        let response = app
            .server
            .post("/message/send")
            .authorization_bearer(&users[1].token)
            .json(&json!({"channel_id": channel_id, "message": "hi"}))
            .await;
        assert_status!(response, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_edit_and_remove_permissions() {
        let app = spawn_app();
        let users = register_users(&app.server, 3).await;
        let channel_id = create_channel(&app.server, &users[1], "general", true).await;
        join(&app.server, &users[2], channel_id).await;
        let message_id = send_message(&app.server, &users[1], channel_id, "original").await;

        let response = app
            .server
            .put("/message/edit")
            .authorization_bearer(&users[2].token)
            .json(&json!({"message_id": message_id, "message": "hijacked"}))
            .await;
        assert_status!(response, StatusCode::FORBIDDEN);

        // the Dreams owner may edit without being a member
        let response = app
            .server
            .put("/message/edit")
            .authorization_bearer(&users[0].token)
            .json(&json!({"message_id": message_id, "message": "moderated"}))
            .await;
        assert_status!(response, StatusCode::OK);
        assert_eq!(page(&app.server, &users[1], channel_id).await["messages"][0]["message"], "moderated");

        // empty text removes
        let response = app
            .server
            .put("/message/edit")
            .authorization_bearer(&users[1].token)
            .json(&json!({"message_id": message_id, "message": ""}))
            .await;
        assert_status!(response, StatusCode::OK);
        assert_eq!(page(&app.server, &users[1], channel_id).await["messages"], json!([]));

        let response = app
            .server
            .delete("/message/remove")
            .authorization_bearer(&users[1].token)
            .json(&json!({"message_id": message_id}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_share_appends_comment() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;
        let source = create_channel(&app.server, &users[0], "source", true).await;
        let destination = create_channel(&app.server, &users[0], "destination", true).await;
        let og = send_message(&app.server, &users[0], source, "look at this").await;

        let response = app
            .server
            .post("/message/share")
            .authorization_bearer(&users[0].token)
            .json(&json!({"og_message_id": og, "message": "fyi", "channel_id": destination, "dm_id": null}))
            .await;
        assert_status!(response, StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["shared_message_id"], og + 1);
        assert_eq!(
            page(&app.server, &users[0], destination).await["messages"][0]["message"],
            "look at this\nfyi"
        );

        let response = app
            .server
            .post("/message/share")
            .authorization_bearer(&users[0].token)
            .json(&json!({"og_message_id": og, "channel_id": destination, "dm_id": 0}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);

        // user1 cannot see the original
        let response = app
            .server
            .post("/message/share")
            .authorization_bearer(&users[1].token)
            .json(&json!({"og_message_id": og, "channel_id": destination}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_react_and_unreact() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;
        join(&app.server, &users[1], channel_id).await;
        let message_id = send_message(&app.server, &users[0], channel_id, "react to me").await;

        let response = app
            .server
            .post("/message/react")
            .authorization_bearer(&users[1].token)
            .json(&json!({"message_id": message_id, "react_id": 1}))
            .await;
        assert_status!(response, StatusCode::OK);

        let response = app
            .server
            .post("/message/react")
            .authorization_bearer(&users[1].token)
            .json(&json!({"message_id": message_id, "react_id": 1}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);

        let response = app
            .server
            .post("/message/react")
            .authorization_bearer(&users[0].token)
            .json(&json!({"message_id": message_id, "react_id": 2}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);

        let body = page(&app.server, &users[1], channel_id).await;
        assert_eq!(
            body["messages"][0]["reacts"],
            json!([{"react_id": 1, "u_ids": [users[1].u_id], "is_this_user_reacted": true}])
        );
        let body = page(&app.server, &users[0], channel_id).await;
        assert_eq!(body["messages"][0]["reacts"][0]["is_this_user_reacted"], false);

        let notifications: Value = app
            .server
            .get("/notifications/get")
            .authorization_bearer(&users[0].token)
            .await
            .json();
        assert_eq!(
            notifications["notifications"][0]["notification_message"],
            "user1 reacted to your message in general"
        );

        let response = app
            .server
            .post("/message/unreact")
            .authorization_bearer(&users[1].token)
            .json(&json!({"message_id": message_id, "react_id": 1}))
            .await;
        assert_status!(response, StatusCode::OK);
        let body = page(&app.server, &users[1], channel_id).await;
        assert_eq!(body["messages"][0]["reacts"], json!([]));

        let response = app
            .server
            .post("/message/unreact")
            .authorization_bearer(&users[1].token)
            .json(&json!({"message_id": message_id, "react_id": 1}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_pin_and_unpin() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;
        join(&app.server, &users[1], channel_id).await;
        let message_id = send_message(&app.server, &users[1], channel_id, "pin me").await;

        let response = app
            .server
            .post("/message/pin")
            .authorization_bearer(&users[1].token)
            .json(&json!({"message_id": message_id}))
            .await;
        assert_status!(response, StatusCode::FORBIDDEN);

        let response = app
            .server
            .post("/message/pin")
            .authorization_bearer(&users[0].token)
            .json(&json!({"message_id": message_id}))
            .await;
        assert_status!(response, StatusCode::OK);
        assert_eq!(page(&app.server, &users[1], channel_id).await["messages"][0]["is_pinned"], true);

        let response = app
            .server
            .post("/message/pin")
            .authorization_bearer(&users[0].token)
            .json(&json!({"message_id": message_id}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);

        let response = app
            .server
            .post("/message/unpin")
            .authorization_bearer(&users[0].token)
            .json(&json!({"message_id": message_id}))
            .await;
        assert_status!(response, StatusCode::OK);
        assert_eq!(page(&app.server, &users[1], channel_id).await["messages"][0]["is_pinned"], false);
    }

    #[tokio::test]
    async fn test_tag_notifies_members_only() {
        let app = spawn_app();
        let users = register_users(&app.server, 3).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;
        join(&app.server, &users[1], channel_id).await;

        send_message(&app.server, &users[0], channel_id, "hi @user1 and @user2, welcome").await;

        let notifications: Value = app
            .server
            .get("/notifications/get")
            .authorization_bearer(&users[1].token)
            .await
            .json();
        assert_eq!(
            notifications["notifications"],
            json!([{"channel_id": channel_id, "dm_id": null, "notification_message": "user0 tagged you in general: hi @user1 and @user2"}])
        );

        let notifications: Value = app
            .server
            .get("/notifications/get")
            .authorization_bearer(&users[2].token)
            .await
            .json();
        assert_eq!(notifications["notifications"], json!([]));
    }

    #[tokio::test]
    async fn test_send_later_delivers_after_delay() {
        let app = spawn_app();
        let users = register_users(&app.server, 1).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;
        let time_sent = chrono::Utc::now().timestamp() + 2;

        let (response, early) = tokio::join!(
            async {
                app.server
                    .post("/message/sendlater")
                    .authorization_bearer(&users[0].token)
                    .json(&json!({"channel_id": channel_id, "message": "later", "time_sent": time_sent}))
                    .await
            },
            async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                (
                    app.state.scheduler.pending(),
                    page(&app.server, &users[0], channel_id).await,
                )
            }
        );
        assert_eq!(early.0, 1);
        assert_eq!(early.1["messages"], json!([]));

        // the request returns once the message has been delivered
        assert_status!(response, StatusCode::OK);
        let message_id = response.json::<Value>()["message_id"].clone();
        assert!(chrono::Utc::now().timestamp() >= time_sent);

        let body = page(&app.server, &users[0], channel_id).await;
        assert_eq!(body["messages"][0]["message_id"], message_id);
        assert_eq!(body["messages"][0]["message"], "later");
        assert_eq!(body["messages"][0]["time_created"], time_sent);
    }

    #[tokio::test]
    async fn test_send_later_reports_failed_delivery() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;
        join(&app.server, &users[1], channel_id).await;
        let time_sent = chrono::Utc::now().timestamp() + 2;

        let (response, _) = tokio::join!(
            async {
                app.server
                    .post("/message/sendlater")
                    .authorization_bearer(&users[1].token)
                    .json(&json!({"channel_id": channel_id, "message": "bye", "time_sent": time_sent}))
                    .await
            },
            async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                let response = app
                    .server
                    .post("/channel/leave")
                    .authorization_bearer(&users[1].token)
                    .json(&json!({"channel_id": channel_id}))
                    .await;
                assert_status!(response, StatusCode::OK);
            }
        );
        assert_status!(response, StatusCode::FORBIDDEN);
        assert_eq!(page(&app.server, &users[0], channel_id).await["messages"], json!([]));
    }

    #[tokio::test]
    async fn test_send_later_rejects_past_time() {
        let app = spawn_app();
        let users = register_users(&app.server, 1).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;

        let response = app
            .server
            .post("/message/sendlater")
            .authorization_bearer(&users[0].token)
            .json(&json!({"channel_id": channel_id, "message": "too late", "time_sent": 0}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);

        let response = app
            .server
            .post("/message/sendlaterdm")
            .authorization_bearer(&users[0].token)
            .json(&json!({"dm_id": 5, "message": "nowhere", "time_sent": chrono::Utc::now().timestamp() + 60}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
    }
}
