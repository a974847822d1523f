pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod table;
pub mod tree;

pub use decoder::HuffmanDecoder;
pub use encoder::{HuffmanEncoder, HuffmanEncoding};
pub use frequency::FrequencyTable;
pub use table::CodeTable;
pub use tree::CodeTree;

use std::time::Instant;

use crate::error::Result;
use crate::progress::{ProgressEvent, ProgressReporter, Stage};
use crate::result::CompressionResult;
use crate::Algorithm;

/// Huffman coding over characters
///
/// The payload is the concatenated code bits as text. Its size is counted as the packed byte
/// length plus the serialized code table, since the bits alone cannot be decoded.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(
        &self,
        input: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<CompressionResult> {
        let started = Instant::now();
        let encoding = HuffmanEncoder::new().encode(input, progress)?;
        let compressed_size = encoding.compressed_size()?;

        let result = CompressionResult::assemble(
            Algorithm::Huffman,
            input,
            encoding.bits,
            compressed_size,
            started,
            Some(encoding.table),
        );
        progress.report(&ProgressEvent::new(
            Stage::Complete,
            100,
            format!("{} bytes -> {} bytes", result.original_size, result.compressed_size),
        ));
        Ok(result)
    }

    /// Decode a bit-string payload with the table produced when it was encoded
    pub fn decode(&self, payload: &str, table: &CodeTable) -> Result<String> {
        HuffmanDecoder::new(table)?.decode(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{NoProgress, ProgressLog};

    #[test]
    fn test_round_trip_with_table() {
        let codec = HuffmanCodec::new();
        let input = "it was the best of times, it was the worst of times";
        let result = codec.encode(input, &mut NoProgress).unwrap();
        let table = result.code_table.as_ref().unwrap();
        assert!(table.is_prefix_free());
        assert_eq!(codec.decode(&result.compressed, table).unwrap(), input);
    }

    #[test]
    fn test_single_symbol_round_trip() {
        let codec = HuffmanCodec::new();
        let result = codec.encode("qqqqqq", &mut NoProgress).unwrap();
        let table = result.code_table.as_ref().unwrap();
        assert_eq!(table.get('q'), Some("0"));
        assert_eq!(result.compressed, "000000");
        assert_eq!(codec.decode(&result.compressed, table).unwrap(), "qqqqqq");
    }

    #[test]
    fn test_empty_input() {
        let codec = HuffmanCodec::new();
        let result = codec.encode("", &mut NoProgress).unwrap();
        assert_eq!(result.original_size, 0);
        assert_eq!(result.compression_ratio, 0.0);
        let table = result.code_table.as_ref().unwrap();
        assert_eq!(codec.decode(&result.compressed, table).unwrap(), "");
    }

    #[test]
    fn test_size_math() {
        let result = HuffmanCodec::new().encode("abcc", &mut NoProgress).unwrap();
        // 6 bits -> 1 byte, plus {"a":"10","b":"11","c":"0"}
        assert_eq!(result.compressed_size, 1 + 27);
        assert_eq!(result.original_size, 4);
        assert!(result.compression_ratio < 0.0);
    }

    #[test]
    fn test_progress_ends_at_complete() {
        let mut log = ProgressLog::default();
        HuffmanCodec::new().encode("mississippi", &mut log).unwrap();
        let pcts: Vec<u8> = log.events.iter().map(|e| e.percentage).collect();
        assert_eq!(pcts, vec![20, 40, 60, 80, 100]);
        assert_eq!(log.events.last().map(|e| e.stage), Some(Stage::Complete));
    }
}
