//! Property tests for the love-compatibility score.

use proptest::prelude::*;

use numera::compatibility_score;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The score is bounded to 30..=100 for every input pair,
    /// not just well-formed life paths.
    #[test]
    fn property_score_bounds(a in any::<u8>(), b in any::<u8>()) {
        let score = compatibility_score(a, b);
        prop_assert!((30..=100).contains(&score), "({}, {}) -> {}", a, b, score);
    }

    /// PROPERTY: The score is symmetric.
    #[test]
    fn property_score_is_symmetric(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(compatibility_score(a, b), compatibility_score(b, a));
    }

    /// PROPERTY: A pair always scores 100 against itself - zero distance
    /// plus the parity bonus, capped.
    #[test]
    fn property_identical_paths_score_100(a in any::<u8>()) {
        prop_assert_eq!(compatibility_score(a, a), 100);
    }

    /// PROPERTY: Equal parity never lowers a score: the bonus path is at
    /// least as good as the no-bonus path for the same distance.
    #[test]
    fn property_parity_bonus_is_monotone(a in 1u8..=9, b in 1u8..=9) {
        let score = compatibility_score(a, b);
        if a % 2 == b % 2 {
            // Bonus applied on top of the clamped base.
            prop_assert!(score >= 40);
        }
    }
}
