//! Property-based tests for field validation

use dreams::shared::validation::{
    validate_channel_name, validate_handle, validate_message, validate_password,
    MAX_CHANNEL_NAME_LEN, MAX_MESSAGE_LEN, MIN_PASSWORD_LEN,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_message_length_boundary(len in 0usize..1100) {
        let text = "é".repeat(len);
        prop_assert_eq!(validate_message(&text).is_ok(), len <= MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_channel_name_boundary(name in "\\PC{0,30}") {
        let ok = name.chars().count() <= MAX_CHANNEL_NAME_LEN;
        prop_assert_eq!(validate_channel_name(&name).is_ok(), ok);
    }

    #[test]
    fn test_handle_boundary(handle in "[a-z0-9]{0,25}") {
        let ok = (3..=20).contains(&handle.len());
        prop_assert_eq!(validate_handle(&handle).is_ok(), ok);
    }

    #[test]
    fn test_password_boundary(password in "\\PC{0,12}") {
        let ok = password.chars().count() >= MIN_PASSWORD_LEN;
        prop_assert_eq!(validate_password(&password).is_ok(), ok);
    }
}
