#![no_main]

use libfuzzer_sys::fuzz_target;

use numera::BirthDate;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Date parsing and ISO reshaping should never panic, including on
        // multi-byte characters near the separator positions.
        if let Ok(dob) = input.parse::<BirthDate>() {
            // A parsed date always round-trips through Display.
            let round_tripped: BirthDate = dob.to_string().parse().unwrap();
            assert_eq!(round_tripped, dob);
        }
        let _ = numera::format_birth_date(input);
    }
});
