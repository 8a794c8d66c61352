//! Account Operations
//!
//! Store-side halves of registration, login and password reset. Password
//! hashing and verification happen in the handlers, outside the store lock;
//! these functions only see hashes.

use rand::Rng;

use crate::backend::error::BackendError;
use crate::backend::store::model::{Document, UserRecord};
use crate::shared::user::RegisterRequest;
use crate::shared::validation::{
    base_handle, validate_email, validate_name, validate_password,
};
use crate::shared::{Permission, SharedError, UserId};

/// Length of a password reset code
pub const RESET_CODE_LEN: usize = 16;

/// Check every registration field that does not need the store
pub fn validate_registration(request: &RegisterRequest) -> Result<(), SharedError> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;
    validate_name("name_first", &request.name_first)?;
    validate_name("name_last", &request.name_last)?;
    Ok(())
}

/// Pick a free handle for a new user
///
/// Starts from [`base_handle`]; if it is taken, appends the smallest integer
/// (from 0) that gives an unused handle.
pub fn generate_handle(document: &Document, name_first: &str, name_last: &str) -> String {
    let base = base_handle(name_first, name_last);
    if !document.handle_taken(&base) {
        return base;
    }
    (0u32..)
        .map(|suffix| format!("{}{}", base, suffix))
        .find(|candidate| !document.handle_taken(candidate))
        .unwrap_or(base)
}

/// Add a user to the store
///
/// The first user ever registered becomes a Dreams owner.
///
/// # Errors
///
/// `InputError` if the email is already registered.
pub fn register(
    document: &mut Document,
    request: &RegisterRequest,
    password_hash: String,
) -> Result<UserId, BackendError> {
    if document.user_by_email(&request.email).is_some() {
        return Err(BackendError::input("Email is already registered"));
    }

    let handle_str = generate_handle(document, &request.name_first, &request.name_last);
    let permission = if document.users.is_empty() {
        Permission::Owner
    } else {
        Permission::Member
    };
    let u_id = document.next_user_id();

    document.users.push(UserRecord {
        u_id,
        email: request.email.clone(),
        password_hash,
        name_first: request.name_first.clone(),
        name_last: request.name_last.clone(),
        handle_str,
        permission,
        removed: false,
        reset_code: None,
    });
    Ok(u_id)
}

/// Find the account a login attempt refers to
///
/// Returns the user id and stored hash for the handler to verify.
pub fn login_candidate(document: &Document, email: &str) -> Result<(UserId, String), BackendError> {
    validate_email(email)?;
    if let Some(user) = document.user_by_email(email) {
        return Ok((user.u_id, user.password_hash.clone()));
    }
    if document.users.iter().any(|u| u.removed && u.email == email) {
        Err(BackendError::input("This account has been removed"))
    } else {
        Err(BackendError::input("Email is not registered"))
    }
}

/// Generate a reset code: uppercase letters alternating with digits
pub fn generate_reset_code() -> String {
    let mut rng = rand::rng();
    let mut code = String::with_capacity(RESET_CODE_LEN);
    for _ in 0..RESET_CODE_LEN / 2 {
        code.push(rng.random_range(b'A'..=b'Z') as char);
        code.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    code
}

/// Store a fresh reset code on the user with `email`
///
/// Returns the code; regenerates on the (unlikely) collision with another
/// user's outstanding code.
pub fn issue_reset_code(document: &mut Document, email: &str) -> Result<String, BackendError> {
    let u_id = document
        .user_by_email(email)
        .map(|u| u.u_id)
        .ok_or_else(|| BackendError::input("Email is not registered"))?;

    let mut code = generate_reset_code();
    while document
        .users
        .iter()
        .any(|u| u.reset_code.as_deref() == Some(code.as_str()))
    {
        code = generate_reset_code();
    }

    document.user_mut(u_id)?.reset_code = Some(code.clone());
    Ok(code)
}

/// Find the user holding `reset_code`
pub fn reset_code_owner(document: &Document, reset_code: &str) -> Result<UserId, BackendError> {
    document
        .users
        .iter()
        .find(|u| !u.removed && u.reset_code.as_deref() == Some(reset_code))
        .map(|u| u.u_id)
        .ok_or_else(|| BackendError::input("Invalid reset code"))
}

/// Replace the password of the user holding `reset_code` and consume the code
pub fn reset_password(
    document: &mut Document,
    reset_code: &str,
    password_hash: String,
) -> Result<UserId, BackendError> {
    let u_id = reset_code_owner(document, reset_code)?;
    let user = document.user_mut(u_id)?;
    user.password_hash = password_hash;
    user.reset_code = None;
    Ok(u_id)
}
