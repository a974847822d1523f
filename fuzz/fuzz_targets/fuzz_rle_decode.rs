#![no_main]

use libfuzzer_sys::fuzz_target;
use tripack::{Algorithm, Codec};

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = std::str::from_utf8(data) else {
        return;
    };

    // Arbitrary payloads must decode or fail cleanly, never panic
    let _ = Codec::default().decode(payload, Algorithm::Rle);
});
