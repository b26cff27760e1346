//! Property-based tests for `AccountNumber`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use super::account_number::AccountNumber;
use crate::error::ValidationError;

fn hash_of(number: &AccountNumber) -> u64 {
    let mut hasher = DefaultHasher::new();
    number.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    /// Parsing the same well-formed string twice yields equal, same-hashing values.
    #[test]
    fn test_parse_is_structural(raw in "[0-9]-[0-9]{3}-[0-9]{3}-[0-9]{3}") {
        let first = AccountNumber::parse(raw.clone()).unwrap();
        let second = AccountNumber::parse(raw.clone()).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(hash_of(&first), hash_of(&second));
        prop_assert_eq!(first.as_str(), raw.as_str());
    }

    /// Strings that are not `D-DDD-DDD-DDD` never parse.
    #[test]
    fn test_wrong_shape_rejected(raw in "[0-9-]{0,16}") {
        let well_formed = raw.len() == 13
            && raw.char_indices().all(|(i, c)| {
                if matches!(i, 1 | 5 | 9) { c == '-' } else { c.is_ascii_digit() }
            });
        prop_assume!(!well_formed);

        prop_assert_eq!(
            AccountNumber::parse(raw.clone()),
            Err(ValidationError::InvalidFormat(raw))
        );
    }

    /// The JSON form is the bare string.
    #[test]
    fn test_json_form_is_bare_string(raw in "[0-9]-[0-9]{3}-[0-9]{3}-[0-9]{3}") {
        let number = AccountNumber::parse(raw.clone()).unwrap();
        let json = serde_json::to_string(&number).unwrap();
        prop_assert_eq!(json, format!("\"{raw}\""));
    }
}
