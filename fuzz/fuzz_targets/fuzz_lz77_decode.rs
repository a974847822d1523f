#![no_main]

use libfuzzer_sys::fuzz_target;
use tripack::{Algorithm, Codec};

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = std::str::from_utf8(data) else {
        return;
    };

    // Back-references into missing output must be rejected, not followed
    let _ = Codec::default().decode(payload, Algorithm::Lz77);
});
