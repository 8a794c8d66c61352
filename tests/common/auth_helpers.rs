//! Authentication test helpers
//!
//! Registers users through the real `/auth/register` route so every test
//! exercises hashing, handle generation and session creation.

use axum_test::TestServer;
use serde_json::{json, Value};

/// Password used for every helper-registered user
pub const TEST_PASSWORD: &str = "password123";

/// A registered user and their session token
pub struct TestUser {
    pub u_id: u64,
    pub email: String,
    pub token: String,
}

pub async fn register(server: &TestServer, email: &str, name_first: &str, name_last: &str) -> TestUser {
    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": email,
            "password": TEST_PASSWORD,
            "name_first": name_first,
            "name_last": name_last,
        }))
        .await;
    let body: Value = response.json();
    TestUser {
        u_id: body["auth_user_id"]
            .as_u64()
            .unwrap_or_else(|| panic!("Registration failed: {}", body)),
        email: email.to_string(),
        token: body["token"].as_str().unwrap_or_default().to_string(),
    }
}

/// Register `count` users named `user{n}`; the first is the Dreams owner
pub async fn register_users(server: &TestServer, count: usize) -> Vec<TestUser> {
    let mut users = Vec::with_capacity(count);
    for n in 0..count {
        users.push(register(server, &format!("user{}@test.com", n), "user", &n.to_string()).await);
    }
    users
}

/// Create a channel as `owner` and return its id
pub async fn create_channel(server: &TestServer, owner: &TestUser, name: &str, is_public: bool) -> u64 {
    let body: Value = server
        .post("/channels/create")
        .authorization_bearer(&owner.token)
        .json(&json!({ "name": name, "is_public": is_public }))
        .await
        .json();
    body["channel_id"]
        .as_u64()
        .unwrap_or_else(|| panic!("Channel creation failed: {}", body))
}

/// Send a channel message and return its id
pub async fn send_message(server: &TestServer, sender: &TestUser, channel_id: u64, text: &str) -> u64 {
    let body: Value = server
        .post("/message/send")
        .authorization_bearer(&sender.token)
        .json(&json!({ "channel_id": channel_id, "message": text }))
        .await
        .json();
    body["message_id"]
        .as_u64()
        .unwrap_or_else(|| panic!("Send failed: {}", body))
}
