//! Property-based tests for handle generation and mention parsing

use dreams::shared::validation::{base_handle, mentioned_handles, GENERATED_HANDLE_LEN};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_base_handle_is_short_and_clean(first in "\\PC{0,40}", last in "\\PC{0,40}") {
        let handle = base_handle(&first, &last);
        prop_assert!(handle.chars().count() <= GENERATED_HANDLE_LEN);
        prop_assert!(!handle.contains('@'));
        prop_assert!(!handle.chars().any(char::is_whitespace));
    }

    #[test]
    fn test_base_handle_is_idempotent(first in "[a-zA-Z ]{1,30}", last in "[a-zA-Z ]{1,30}") {
        let handle = base_handle(&first, &last);
        prop_assert_eq!(base_handle(&handle, ""), handle);
    }

    #[test]
    fn test_mentions_never_contain_separators(text in "[a-z @\\n]{0,80}") {
        for handle in mentioned_handles(&text) {
            prop_assert!(!handle.is_empty());
            prop_assert!(!handle.contains('@'));
            prop_assert!(!handle.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn test_mention_found_in_any_position(
        prefix in "[a-z ]{0,20}",
        handle in "[a-z0-9]{1,20}",
        suffix in "[a-z ]{0,20}",
    ) {
        let text = format!("{} @{} {}", prefix, handle, suffix);
        prop_assert!(mentioned_handles(&text).contains(&handle.as_str()));
    }
}
