#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let n = u64::from_le_bytes(data[..8].try_into().unwrap());
    let finalize = data[8] & 1 == 1;

    // Reduction is total: never panics, and the result respects the mode.
    let reduced = numera::reduce(n, finalize);
    if finalize {
        assert!(reduced <= 9);
    } else {
        assert!(reduced <= 9 || numera::is_master_number(reduced as u64));
    }
});
