#![no_main]

use libfuzzer_sys::fuzz_target;
use tripack::{Codec, CodeTable, NoProgress};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let codec = Codec::default();

    // First line is a table in JSON form, the rest a bit-string
    if let Some((table, payload)) = input.split_once('\n') {
        if let Ok(table) = CodeTable::from_json(table) {
            let _ = codec.decode_huffman(payload, &table);
        }
    }

    // A table built from the input decodes arbitrary bit-strings or fails cleanly
    let result = match codec.encode(input, tripack::Algorithm::Huffman, &mut NoProgress) {
        Ok(result) => result,
        Err(_) => return,
    };
    if let Some(table) = &result.code_table {
        let bits: String = data.iter().map(|b| if b & 1 == 1 { '1' } else { '0' }).collect();
        let _ = codec.decode_huffman(&bits, table);
    }
});
