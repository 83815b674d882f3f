#![no_main]

use libfuzzer_sys::fuzz_target;

use numera::{CharacterChart, LetterFilter};

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Normalization and the calculators built on it shouldn't panic
        // regardless of input.
        let _ = numera::normalize_name(name);
        for filter in [
            LetterFilter::All,
            LetterFilter::Vowels,
            LetterFilter::Consonants,
        ] {
            let _ = numera::name_number(name, filter);
        }

        // The chart always conserves the normalized letter count.
        let chart = CharacterChart::for_name(name);
        assert_eq!(
            chart.total() as usize,
            numera::normalize_name(name).chars().count()
        );
    }
});
