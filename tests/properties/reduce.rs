//! Property tests for digit reduction.

use proptest::prelude::*;

use numera::{is_master_number, reduce};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Finalizing reduction always lands on a single digit, and
    /// on a non-zero one for non-zero input.
    #[test]
    fn property_finalized_reduce_is_single_digit(n in any::<u64>()) {
        let reduced = reduce(n, true);
        prop_assert!(reduced <= 9);
        if n > 0 {
            prop_assert!(reduced >= 1);
        }
    }

    /// PROPERTY: Finalizing reduction is idempotent.
    #[test]
    fn property_finalized_reduce_is_idempotent(n in any::<u64>()) {
        let once = reduce(n, true);
        prop_assert_eq!(reduce(once as u64, true), once);
    }

    /// PROPERTY: Non-finalizing reduction terminates at a single digit or a
    /// Master Number, nothing else.
    #[test]
    fn property_open_reduce_is_digit_or_master(n in any::<u64>()) {
        let reduced = reduce(n, false);
        prop_assert!(
            reduced <= 9 || is_master_number(reduced as u64),
            "reduce({}, false) = {}",
            n,
            reduced
        );
    }

    /// PROPERTY: Non-finalizing reduction is also idempotent - its results
    /// are fixed points (digits stay, Master Numbers survive the check).
    #[test]
    fn property_open_reduce_is_idempotent(n in any::<u64>()) {
        let once = reduce(n, false);
        prop_assert_eq!(reduce(once as u64, false), once);
    }

    /// PROPERTY: When the open reduction yields a plain digit, finalizing
    /// agrees with it; they only diverge on Master Numbers.
    #[test]
    fn property_modes_agree_off_master_path(n in any::<u64>()) {
        let open = reduce(n, false);
        if !is_master_number(open as u64) {
            prop_assert_eq!(reduce(n, true), open);
        }
    }
}

#[test]
fn master_numbers_survive_only_without_finalize() {
    for n in [11u64, 22, 33] {
        assert_eq!(reduce(n, false) as u64, n);
        assert!(reduce(n, true) <= 9);
    }
}
