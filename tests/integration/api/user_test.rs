//! User profile and statistics API integration tests

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::common::{create_channel, register_users, send_message, spawn_app};
    use crate::{assert_approx_eq, assert_status};

    #[tokio::test]
    async fn test_profile_edits() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;
        let token = &users[1].token;

        let response = app
            .server
            .put("/user/profile/setname")
            .authorization_bearer(token)
            .json(&json!({"name_first": "Grace", "name_last": "Hopper"}))
            .await;
        assert_status!(response, StatusCode::OK);

        let response = app
            .server
            .put("/user/profile/setemail")
            .authorization_bearer(token)
            .json(&json!({"email": "grace@navy.mil"}))
            .await;
        assert_status!(response, StatusCode::OK);

        let response = app
            .server
            .put("/user/profile/sethandle")
            .authorization_bearer(token)
            .json(&json!({"handle_str": "amazinggrace"}))
            .await;
        assert_status!(response, StatusCode::OK);

        let profile: Value = app
            .server
            .get("/user/profile")
            .authorization_bearer(&users[0].token)
            .add_query_param("u_id", users[1].u_id)
            .await
            .json();
        assert_eq!(
            profile["user"],
            json!({
                "u_id": users[1].u_id,
                "email": "grace@navy.mil",
                "name_first": "Grace",
                "name_last": "Hopper",
                "handle_str": "amazinggrace"
            })
        );
    }

    #[tokio::test]
    async fn test_profile_edit_conflicts() {
        let app = spawn_app();
        let users = register_users(&app.server, 2).await;
        let token = &users[1].token;

        for (path, body) in [
            ("/user/profile/setemail", json!({"email": "user0@test.com"})),
            ("/user/profile/setemail", json!({"email": "nope"})),
            ("/user/profile/sethandle", json!({"handle_str": "user0"})),
            ("/user/profile/sethandle", json!({"handle_str": "ab"})),
            ("/user/profile/sethandle", json!({"handle_str": "x".repeat(21)})),
            ("/user/profile/setname", json!({"name_first": "", "name_last": "B"})),
        ] {
            let response = app.server.put(path).authorization_bearer(token).json(&body).await;
            assert_status!(response, StatusCode::BAD_REQUEST);
        }

        let response = app
            .server
            .get("/user/profile")
            .authorization_bearer(token)
            .add_query_param("u_id", 42)
            .await;
        assert_status!(response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats() {
        let app = spawn_app();
        let users = register_users(&app.server, 3).await;
        let channel_id = create_channel(&app.server, &users[0], "general", true).await;
        send_message(&app.server, &users[0], channel_id, "one").await;
        app.server
            .post("/dm/create")
            .authorization_bearer(&users[0].token)
            .json(&json!({"u_ids": [users[1].u_id]}))
            .await;

        let body: Value = app
            .server
            .get("/user/stats")
            .authorization_bearer(&users[1].token)
            .await
            .json();
        let stats = &body["user_stats"];
        assert_eq!(stats["channels_joined"][0]["count"], 0);
        assert_eq!(stats["dms_joined"][0]["count"], 1);
        assert_eq!(stats["messages_sent"][0]["count"], 0);
        assert!(stats["messages_sent"][0]["time_stamp"].is_i64());
        assert_approx_eq!(stats["involvement_rate"].as_f64().unwrap(), 1.0 / 3.0, 1e-9);

        let body: Value = app
            .server
            .get("/users/stats")
            .authorization_bearer(&users[2].token)
            .await
            .json();
        let stats = &body["dreams_stats"];
        assert_eq!(stats["channels_exist"][0]["count"], 1);
        assert_eq!(stats["dms_exist"][0]["count"], 1);
        assert_eq!(stats["messages_exist"][0]["count"], 1);
        assert_approx_eq!(stats["utilization_rate"].as_f64().unwrap(), 2.0 / 3.0, 1e-9);
    }
}
