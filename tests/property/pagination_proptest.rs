//! Property-based tests for page boundaries

use dreams::shared::message::{page_end, PAGE_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_end_is_last_page_marker_or_next_start(start in 0usize..500, visible in 0usize..500) {
        let end = page_end(start, visible);
        if start + PAGE_SIZE >= visible {
            prop_assert_eq!(end, -1);
        } else {
            prop_assert_eq!(end, (start + PAGE_SIZE) as i64);
            prop_assert!((end as usize) < visible);
        }
    }

    #[test]
    fn test_walking_pages_covers_history(visible in 0usize..1000) {
        let mut start = 0usize;
        let mut pages = 0usize;
        loop {
            pages += 1;
            match page_end(start, visible) {
                -1 => break,
                next => start = next as usize,
            }
        }
        prop_assert_eq!(pages, visible.saturating_sub(1) / PAGE_SIZE + 1);
    }
}
