//! Property tests for name normalization, name numbers and the character
//! chart.

use proptest::prelude::*;

use numera::{
    destiny_number, is_master_number, letter_value, name_number, normalize_name, CharacterChart,
    LetterFilter,
};

/// Names drawn from the fixed alphabet (lower- and upper-case), digits,
/// whitespace and punctuation. Stays inside the closed letter set so that
/// case mapping is an alphabet-internal operation.
fn name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zçğıiöşüA-ZÇĞİÖŞÜ 0-9.,!-]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalized names contain only characters with a letter
    /// value, all lower-case.
    #[test]
    fn property_normalize_keeps_only_valued_letters(name in "(?s).{0,64}") {
        for ch in normalize_name(&name).chars() {
            prop_assert!(letter_value(ch).is_some());
        }
    }

    /// PROPERTY: Normalization is idempotent.
    #[test]
    fn property_normalize_is_idempotent(name in "(?s).{0,64}") {
        let once = normalize_name(&name);
        prop_assert_eq!(normalize_name(&once), once.clone());
    }

    /// PROPERTY: Name numbers are case-insensitive over the alphabet.
    #[test]
    fn property_name_numbers_ignore_case(name in name_strategy()) {
        for filter in [LetterFilter::All, LetterFilter::Vowels, LetterFilter::Consonants] {
            prop_assert_eq!(
                name_number(&name, filter),
                name_number(&name.to_uppercase(), filter),
                "filter {}",
                filter
            );
        }
    }

    /// PROPERTY: A name number is absent exactly when no letter passes the
    /// filter, and otherwise is a digit 1..=9 or a Master Number.
    #[test]
    fn property_name_number_range(name in name_strategy()) {
        let normalized = normalize_name(&name);
        for filter in [LetterFilter::All, LetterFilter::Vowels, LetterFilter::Consonants] {
            let has_match = normalized.chars().any(|ch| filter.matches(ch));
            match name_number(&name, filter) {
                None => prop_assert!(!has_match),
                Some(number) => {
                    prop_assert!(has_match);
                    let value = number.value();
                    prop_assert!(
                        (1..=9).contains(&value) || is_master_number(value as u64)
                    );
                }
            }
        }
    }

    /// PROPERTY: The chart bins conserve the normalized letter count.
    #[test]
    fn property_chart_conserves_letters(name in "(?s).{0,64}") {
        let chart = CharacterChart::for_name(&name);
        prop_assert_eq!(
            chart.total() as usize,
            normalize_name(&name).chars().count()
        );
    }

    /// PROPERTY: Name calculators never panic on arbitrary input.
    #[test]
    fn property_name_calculators_never_panic(name in "(?s).{0,256}") {
        let _ = normalize_name(&name);
        let _ = destiny_number(&name);
        let _ = CharacterChart::for_name(&name);
    }
}
