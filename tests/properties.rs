//! Property-based tests for the codecs.
//!
//! - RLE and LZ77 round-trip arbitrary text, digits and escapes included
//! - Huffman round-trips when given its own code table, and the table is prefix-free
//! - Packed and textual Huffman bits decode to the same text
//! - LZ77 triples stay inside the configured window and look-ahead
//!
//! Run with: cargo test --test properties

use proptest::prelude::*;

use tripack::huffman::{CodeTable, CodeTree, FrequencyTable, HuffmanDecoder, HuffmanEncoder};
use tripack::lz77::{Lz77Config, Lz77Encoder};
use tripack::{Algorithm, Codec, CodecConfig, NoProgress};

/// Strategy for text biased towards runs and repeats, with digits and backslashes mixed in.
fn runny_text_strategy() -> impl Strategy<Value = String> {
    let symbol = prop::sample::select(vec!['a', 'b', '1', '0', '\\', ' ', '-', 'é']);
    prop::collection::vec((symbol, 1..12usize), 0..40).prop_map(|runs| {
        runs.into_iter().flat_map(|(c, n)| std::iter::repeat(c).take(n)).collect()
    })
}

/// Strategy for small LZ77 windows that force many window-edge cases.
fn lz77_config_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1..32usize, 1..20usize)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 200,
        ..ProptestConfig::default()
    })]

    /// Property: RLE decode(encode(x)) == x for any text.
    #[test]
    fn prop_rle_round_trip(input in any::<String>()) {
        let codec = Codec::default();
        let result = codec.encode(&input, Algorithm::Rle, &mut NoProgress).unwrap();
        prop_assert_eq!(codec.decode(&result.compressed, Algorithm::Rle).unwrap(), input);
    }

    /// Property: RLE round-trips run-heavy text with digits and escapes.
    #[test]
    fn prop_rle_round_trip_runs(input in runny_text_strategy(), max_run in 1..=255usize) {
        let codec = Codec::new(CodecConfig::default().with_max_run(max_run));
        let result = codec.encode(&input, Algorithm::Rle, &mut NoProgress).unwrap();
        prop_assert_eq!(codec.decode(&result.compressed, Algorithm::Rle).unwrap(), input);
    }

    /// Property: LZ77 decode(encode(x)) == x for any window configuration.
    #[test]
    fn prop_lz77_round_trip(
        input in runny_text_strategy(),
        (window, look_ahead) in lz77_config_strategy(),
    ) {
        let codec = Codec::new(
            CodecConfig::default().with_window_size(window).with_look_ahead_size(look_ahead),
        );
        let result = codec.encode(&input, Algorithm::Lz77, &mut NoProgress).unwrap();
        prop_assert_eq!(codec.decode(&result.compressed, Algorithm::Lz77).unwrap(), input);
    }

    /// Property: every triple respects the configured bounds and consumes at least one symbol.
    #[test]
    fn prop_lz77_triples_bounded(
        input in runny_text_strategy(),
        (window, look_ahead) in lz77_config_strategy(),
    ) {
        let symbols: Vec<char> = input.chars().collect();
        let config = Lz77Config { window_size: window, look_ahead_size: look_ahead };
        let triples = Lz77Encoder::new(config).encode(&symbols, &mut NoProgress);

        let mut consumed = 0;
        for triple in &triples {
            prop_assert!(triple.offset <= window);
            prop_assert!(triple.length <= look_ahead);
            prop_assert!(triple.decoded_len() >= 1);
            if triple.length > 0 {
                prop_assert!(triple.offset >= 1 && triple.offset <= consumed);
            }
            consumed += triple.decoded_len();
        }
        prop_assert_eq!(consumed, symbols.len());
    }

    /// Property: Huffman round-trips with its own table.
    #[test]
    fn prop_huffman_round_trip(input in any::<String>()) {
        let codec = Codec::default();
        let result = codec.encode(&input, Algorithm::Huffman, &mut NoProgress).unwrap();
        let table = result.code_table.as_ref().unwrap();
        prop_assert_eq!(codec.decode_huffman(&result.compressed, table).unwrap(), input);
    }

    /// Property: the packed bytes decode exactly like the bit-string.
    #[test]
    fn prop_huffman_packed_matches_bits(input in any::<String>()) {
        let encoding = HuffmanEncoder::new().encode(&input, &mut NoProgress).unwrap();
        prop_assert_eq!(encoding.bit_len, encoding.bits.len());
        prop_assert_eq!(encoding.packed.len(), (encoding.bit_len + 7) / 8);

        let decoder = HuffmanDecoder::new(&encoding.table).unwrap();
        let from_packed = decoder.decode_packed(&encoding.packed, encoding.bit_len).unwrap();
        prop_assert_eq!(&from_packed, &decoder.decode(&encoding.bits).unwrap());
        prop_assert_eq!(from_packed, input);
    }

    /// Property: generated code tables are prefix-free and cover every symbol.
    #[test]
    fn prop_code_table_prefix_free(input in "[a-f]{1,200}") {
        let frequencies = FrequencyTable::from_text(&input);
        let table = CodeTable::from_tree(&CodeTree::build(&frequencies).unwrap());

        prop_assert_eq!(table.len(), frequencies.len());
        let codes: Vec<&str> = table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a), "{} prefixes {}", a, b);
                }
            }
        }
    }

    /// Property: the ratio sign always matches the size comparison.
    #[test]
    fn prop_ratio_sign(input in ".{1,60}") {
        for algorithm in Algorithm::ALL {
            let result = Codec::default().encode(&input, algorithm, &mut NoProgress).unwrap();
            if result.compressed_size > result.original_size {
                prop_assert!(result.compression_ratio < 0.0);
            } else {
                prop_assert!(result.compression_ratio >= 0.0);
            }
        }
    }
}
