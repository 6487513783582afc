//! Property tests for column-name normalization.

use catalog_model::{EXPECTED_COLUMNS, canonical_key};
use proptest::prelude::*;

proptest! {
    #[test]
    fn canonical_key_is_idempotent(input in "\\PC*") {
        let once = canonical_key(&input);
        prop_assert_eq!(canonical_key(&once), once);
    }

    #[test]
    fn canonical_key_is_lowercase_ascii_alphanumeric(input in "\\PC*") {
        let key = canonical_key(&input);
        prop_assert!(key.chars().all(|ch| ch.is_ascii_digit() || ch.is_ascii_lowercase()));
    }

    #[test]
    fn punctuation_and_case_do_not_matter(idx in 0..EXPECTED_COLUMNS.len(), sep in "[ ._/-]{0,3}") {
        let column = EXPECTED_COLUMNS[idx];
        let variant = format!("{sep}{}{sep}", column.to_uppercase());
        prop_assert_eq!(canonical_key(column), canonical_key(&variant));
    }
}
