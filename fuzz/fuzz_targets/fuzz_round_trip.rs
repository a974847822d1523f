#![no_main]

use libfuzzer_sys::fuzz_target;
use tripack::{Algorithm, Codec, CodecConfig, NoProgress};

fuzz_target!(|data: &[u8]| {
    // Every codec must reproduce arbitrary text exactly
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Limit input size; the LZ77 match search is quadratic in the window
    if text.len() > 4 * 1024 {
        return;
    }

    // Small window and run limits reach the boundary cases quickly
    let codec = Codec::new(
        CodecConfig::default().with_window_size(64).with_look_ahead_size(8).with_max_run(9),
    );
    for algorithm in Algorithm::ALL {
        let result = codec.encode(text, algorithm, &mut NoProgress).unwrap();
        let decoded = codec.decode_result(&result).unwrap();
        assert_eq!(decoded, text, "{} round-trip mismatch", algorithm);
    }
});
