//! Input Validation
//!
//! Field-level checks that do not need server state: email format, name,
//! password, handle, channel-name and message lengths. Every check returns a
//! `SharedError::ValidationError` naming the offending field.
//!
//! Lengths are counted in characters, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::error::SharedError;

/// Longest message text accepted anywhere (send, edit, share, standup).
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Longest channel name.
pub const MAX_CHANNEL_NAME_LEN: usize = 20;

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Name bounds, inclusive.
pub const NAME_LEN: std::ops::RangeInclusive<usize> = 1..=50;

/// Handle bounds for `sethandle`, inclusive.
pub const HANDLE_LEN: std::ops::RangeInclusive<usize> = 3..=20;

/// Generated handles are cut to this many characters before de-duplication.
pub const GENERATED_HANDLE_LEN: usize = 20;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+[._]?[a-zA-Z0-9]+@\w+[.]\w{2,3}$").expect("email pattern is valid")
});

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validate an email address against the accepted format
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(SharedError::validation("email", "Invalid email format"))
    }
}

/// Validate a password for registration or reset
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if char_len(password) < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

/// Validate a first or last name
///
/// # Arguments
///
/// * `field` - Field name reported in the error (`name_first` or `name_last`)
/// * `name` - The name to check
pub fn validate_name(field: &str, name: &str) -> Result<(), SharedError> {
    if !NAME_LEN.contains(&char_len(name)) {
        return Err(SharedError::validation(
            field,
            "Name must be between 1 and 50 characters",
        ));
    }
    Ok(())
}

/// Validate a user-chosen handle
pub fn validate_handle(handle: &str) -> Result<(), SharedError> {
    if !HANDLE_LEN.contains(&char_len(handle)) {
        return Err(SharedError::validation(
            "handle_str",
            "Handle must be between 3 and 20 characters",
        ));
    }
    Ok(())
}

/// Validate a channel name
pub fn validate_channel_name(name: &str) -> Result<(), SharedError> {
    if char_len(name) > MAX_CHANNEL_NAME_LEN {
        return Err(SharedError::validation(
            "name",
            format!("Channel name must be at most {} characters", MAX_CHANNEL_NAME_LEN),
        ));
    }
    Ok(())
}

/// Validate message text length
pub fn validate_message(text: &str) -> Result<(), SharedError> {
    if char_len(text) > MAX_MESSAGE_LEN {
        return Err(SharedError::validation(
            "message",
            format!("Message must be at most {} characters", MAX_MESSAGE_LEN),
        ));
    }
    Ok(())
}

/// Validate a search query length
pub fn validate_query(query: &str) -> Result<(), SharedError> {
    if char_len(query) > MAX_MESSAGE_LEN {
        return Err(SharedError::validation(
            "query_str",
            format!("Query must be at most {} characters", MAX_MESSAGE_LEN),
        ));
    }
    Ok(())
}

/// Build the base handle for a new user
///
/// Lowercases `name_first + name_last`, drops `@` and whitespace, and cuts the
/// result to [`GENERATED_HANDLE_LEN`] characters. De-duplication against
/// existing handles happens in the store.
pub fn base_handle(name_first: &str, name_last: &str) -> String {
    name_first
        .chars()
        .chain(name_last.chars())
        .filter(|c| *c != '@' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .take(GENERATED_HANDLE_LEN)
        .collect()
}

/// Pull every `@handle` mention out of a message
///
/// A mention runs from `@` up to the next whitespace or `@`.
pub fn mentioned_handles(text: &str) -> Vec<&str> {
    let mut handles = Vec::new();
    for (index, _) in text.match_indices('@') {
        let rest = &text[index + 1..];
        let end = rest
            .find(|c: char| c.is_whitespace() || c == '@')
            .unwrap_or(rest.len());
        if end > 0 {
            handles.push(&rest[..end]);
        }
    }
    handles
}
