//! Property tests for date parsing and reshaping.

use proptest::prelude::*;

use numera::{format_birth_date, BirthDate};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Birth-date parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,64}") {
        let _ = input.parse::<BirthDate>();
    }

    /// PROPERTY: ISO reshaping never panics on arbitrary input, including
    /// multi-byte characters around the separator positions.
    #[test]
    fn property_format_never_panics(input in "(?s).{0,64}") {
        let _ = format_birth_date(&input);
    }

    /// PROPERTY: Valid components round-trip through Display and FromStr.
    #[test]
    fn property_display_parse_round_trip(
        day in 1u32..=31,
        month in 1u32..=12,
        year in 1u32..=9999,
    ) {
        let dob = BirthDate::new(day, month, year).unwrap();
        let parsed: BirthDate = dob.to_string().parse().unwrap();
        prop_assert_eq!(parsed, dob);
    }

    /// PROPERTY: ISO dates with in-range components reshape to the string
    /// the birth-date parser accepts, and the pieces line up.
    #[test]
    fn property_iso_reshape_parses_as_dob(
        day in 1u32..=31,
        month in 1u32..=12,
        year in 1000u32..=9999,
    ) {
        let iso = format!("{year:04}-{month:02}-{day:02}");
        let reshaped = format_birth_date(&iso).unwrap();
        let dob: BirthDate = reshaped.parse().unwrap();
        prop_assert_eq!(dob.day(), day);
        prop_assert_eq!(dob.month(), month);
        prop_assert_eq!(dob.year(), year);
    }
}
