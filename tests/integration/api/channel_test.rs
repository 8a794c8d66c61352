//! Channel API integration tests

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::assert_status;
    use crate::common::{create_channel, register_users, send_message, spawn_app};

    fn ids(body: &Value, list: &str, key: &str) -> Vec<u64> {
        body[list]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry[key].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;

        let public = create_channel(&app.server, &users[0], "general", true).await;
        let private = create_channel(&app.server, &users[1], "secret", false).await;
        assert_eq!((public, private), (1, 2));

        let mine: Value = app
            .server
            .get("/channels/list")
            .authorization_bearer(&users[0].token)
            .await
            .json();
        assert_eq!(ids(&mine, "channels", "channel_id"), vec![1]);

        let all: Value = app
            .server
            .get("/channels/listall")
            .authorization_bearer(&users[0].token)
            .await
            .json();
        assert_eq!(ids(&all, "channels", "channel_id"), vec![1, 2]);
        assert_eq!(all["channels"][1]["name"], "secret");
    }

    #[tokio::test]
    async fn test_create_rejects_long_name() {
        let app = spawn_app();
        let users = register_users(&app.server, 1).await;
        let response = app
            .server
            .post("/channels/create")
            .authorization_bearer(&users[0].token)
            .json(&json!({"name": "x".repeat(21), "is_public": true}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_join_invite_and_details() {
        let app = spawn_app();
        let users = register_users(&app.server, 3).await;
        let channel_id = create_channel(&app.server, &users[1], "private", false).await;

        // user2 cannot join a private channel, the Dreams owner can
        let response = app
            .server
            .post("/channel/join")
            .authorization_bearer(&users[2].token)
            .json(&json!({"channel_id": channel_id}))
            .await;
        assert_status!(response, StatusCode::FORBIDDEN);
        let response = app
            .server
            .post("/channel/join")
            .authorization_bearer(&users[0].token)
            .json(&json!({"channel_id": channel_id}))
            .await;
        assert_status!(response, StatusCode::OK);

        let response = app
            .server
            .get("/channel/details")
            .authorization_bearer(&users[2].token)
            .add_query_param("channel_id", channel_id)
            .await;
        assert_status!(response, StatusCode::FORBIDDEN);

        let response = app
            .server
            .post("/channel/invite")
            .authorization_bearer(&users[1].token)
            .json(&json!({"channel_id": channel_id, "u_id": users[2].u_id}))
            .await;
        assert_status!(response, StatusCode::OK);

        let details: Value = app
            .server
            .get("/channel/details")
            .authorization_bearer(&users[2].token)
            .add_query_param("channel_id", channel_id)
            .await
            .json();
        assert_eq!(details["name"], "private");
        assert_eq!(details["is_public"], false);
        assert_eq!(ids(&details, "owner_members", "u_id"), vec![users[1].u_id]);
        assert_eq!(
            ids(&details, "all_members", "u_id"),
            vec![users[1].u_id, users[0].u_id, users[2].u_id]
        );

        let notifications: Value = app
            .server
            .get("/notifications/get")
            .authorization_bearer(&users[2].token)
            .await
            .json();
        assert_eq!(
            notifications["notifications"][0],
            json!({"channel_id": channel_id, "dm_id": null, "notification_message": "user1 added you to private"})
        );
    }

    #[tokio::test]
    async fn test_unknown_channel_is_input_error() {
        let app = spawn_app();
        let users = register_users(&app.server, 1).await;
        let response = app
            .server
            .get("/channel/details")
            .authorization_bearer(&users[0].token)
            .add_query_param("channel_id", 42)
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_owner_management() {
        let app = spawn_app();
        let users = register_users(&app.server, 3).await;
        let channel_id = create_channel(&app.server, &users[1], "team", true).await;
        for user in &users[2..] {
            app.server
                .post("/channel/join")
                .authorization_bearer(&user.token)
                .json(&json!({"channel_id": channel_id}))
                .await;
        }

        // a plain member cannot promote
        let response = app
            .server
            .post("/channel/addowner")
            .authorization_bearer(&users[2].token)
            .json(&json!({"channel_id": channel_id, "u_id": users[2].u_id}))
            .await;
        assert_status!(response, StatusCode::FORBIDDEN);

        // the only owner cannot be removed
        let response = app
            .server
            .post("/channel/removeowner")
            .authorization_bearer(&users[1].token)
            .json(&json!({"channel_id": channel_id, "u_id": users[1].u_id}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);

        let response = app
            .server
            .post("/channel/addowner")
            .authorization_bearer(&users[1].token)
            .json(&json!({"channel_id": channel_id, "u_id": users[2].u_id}))
            .await;
        assert_status!(response, StatusCode::OK);

        let response = app
            .server
            .post("/channel/removeowner")
            .authorization_bearer(&users[2].token)
            .json(&json!({"channel_id": channel_id, "u_id": users[1].u_id}))
            .await;
        assert_status!(response, StatusCode::OK);

        let details: Value = app
            .server
            .get("/channel/details")
            .authorization_bearer(&users[1].token)
            .add_query_param("channel_id", channel_id)
            .await
            .json();
        assert_eq!(ids(&details, "owner_members", "u_id"), vec![users[2].u_id]);
    }

    #[tokio::test]
    async fn test_leave() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;
        app.server
            .post("/channel/join")
            .authorization_bearer(&users[1].token)
            .json(&json!({"channel_id": channel_id}))
            .await;

        let response = app
            .server
            .post("/channel/leave")
            .authorization_bearer(&users[0].token)
            .json(&json!({"channel_id": channel_id}))
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);

        let response = app
            .server
            .post("/channel/leave")
            .authorization_bearer(&users[1].token)
            .json(&json!({"channel_id": channel_id}))
            .await;
        assert_status!(response, StatusCode::OK);

        let response = app
            .server
            .post("/channel/leave")
            .authorization_bearer(&users[1].token)
            .json(&json!({"channel_id": channel_id}))
            .await;
        assert_status!(response, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_messages_pagination() {
        let app = spawn_app();
        let users = register_users(&app.server, 1).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;
        for n in 0..55 {
            send_message(&app.server, &users[0], channel_id, &format!("message {}", n)).await;
        }

        let first: Value = app
            .server
            .get("/channel/messages")
            .authorization_bearer(&users[0].token)
            .add_query_param("channel_id", channel_id)
            .add_query_param("start", 0)
            .await
            .json();
        assert_eq!(first["messages"].as_array().unwrap().len(), 50);
        assert_eq!(first["messages"][0]["message"], "message 54");
        assert_eq!(first["start"], 0);
        assert_eq!(first["end"], 50);

        let second: Value = app
            .server
            .get("/channel/messages")
            .authorization_bearer(&users[0].token)
            .add_query_param("channel_id", channel_id)
            .add_query_param("start", 50)
            .await
            .json();
        assert_eq!(second["messages"].as_array().unwrap().len(), 5);
        assert_eq!(second["end"], -1);

        let response = app
            .server
            .get("/channel/messages")
            .authorization_bearer(&users[0].token)
            .add_query_param("channel_id", channel_id)
            .add_query_param("start", 56)
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_requests_get_json_errors() {
        let app = spawn_app();
        let users = register_users(&app.server, 1).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;

        let response = app
            .server
            .post("/channels/create")
            .authorization_bearer(&users[0].token)
            .json(&json!({"name": "no flag"}))
            .await;
        assert_status!(response, StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["status"], 422);
        assert!(body["error"].as_str().unwrap().contains("is_public"));

        let response = app
            .server
            .get("/channel/messages")
            .authorization_bearer(&users[0].token)
            .add_query_param("channel_id", channel_id)
            .add_query_param("start", -1)
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["status"], 400);
    }
}
