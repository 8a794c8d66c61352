//! User and Auth Wire Types
//!
//! Request and response bodies for the `auth/*`, `user/*`, `users/*` and
//! `admin/*` routes, plus the public profile view of a user.

use serde::{Deserialize, Serialize};

/// Numeric user identifier
pub type UserId = u32;

/// Global (Dreams-wide) permission level
///
/// Serialized as the numeric permission id: `1` for owners, `2` for members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Permission {
    /// Dreams owner
    Owner,
    /// Regular member
    Member,
}

impl TryFrom<u8> for Permission {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Permission::Owner),
            2 => Ok(Permission::Member),
            other => Err(format!("Unknown permission id {}", other)),
        }
    }
}

impl From<Permission> for u8 {
    fn from(value: Permission) -> Self {
        match value {
            Permission::Owner => 1,
            Permission::Member => 2,
        }
    }
}

/// Public view of a user (no credentials)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub u_id: UserId,
    pub email: String,
    pub name_first: String,
    pub name_last: String,
    pub handle_str: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
    pub name_first: String,
    pub name_last: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for the new session
    pub token: String,
    pub auth_user_id: UserId,
}

/// Returned by logout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub is_success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetConfirm {
    pub reset_code: String,
    pub new_password: String,
}

/// Query for `user/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileQuery {
    pub u_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetNameRequest {
    pub name_first: String,
    pub name_last: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetHandleRequest {
    pub handle_str: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersAllResponse {
    pub users: Vec<UserProfile>,
}

/// Body for `admin/user/remove`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRemoveRequest {
    pub u_id: UserId,
}

/// Body for `admin/userpermission/change`
///
/// `permission_id` stays a raw integer so that unknown values surface as an
/// input error rather than a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionChangeRequest {
    pub u_id: UserId,
    pub permission_id: i64,
}

/// Empty JSON object returned by operations with no result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Empty {}
