use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::huffman::CodeTable;
use crate::{Algorithm, Codec};

/// Outcome of one encode call, handed to the host for rendering or download
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub algorithm: Algorithm,
    /// UTF-8 byte length of the input
    pub original_size: usize,
    /// Per-algorithm size estimate of the compressed form
    pub compressed_size: usize,
    /// Percentage saved; negative when the output is larger than the input
    pub compression_ratio: f64,
    /// Wall-clock time spent encoding
    #[serde(rename = "processing_time_ms", with = "duration_ms")]
    pub processing_time: Duration,
    pub compressed: String,
    pub original: String,
    /// Code table for Huffman payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_table: Option<CodeTable>,
}

/// `(original - compressed) / original * 100`, or 0 for empty input
pub fn compression_ratio(original_size: usize, compressed_size: usize) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (original_size as f64 - compressed_size as f64) / original_size as f64 * 100.0
}

impl CompressionResult {
    /// Package metrics for an encode that began at `started`
    pub(crate) fn assemble(
        algorithm: Algorithm,
        original: &str,
        compressed: String,
        compressed_size: usize,
        started: Instant,
        code_table: Option<CodeTable>,
    ) -> Self {
        let original_size = original.len();
        Self {
            algorithm,
            original_size,
            compressed_size,
            compression_ratio: compression_ratio(original_size, compressed_size),
            processing_time: started.elapsed(),
            compressed,
            original: original.to_string(),
            code_table,
        }
    }

    /// Whether the compressed form is larger than the input
    pub fn expanded(&self) -> bool {
        self.compressed_size > self.original_size
    }

    /// Decode this result's own payload with the default configuration
    pub fn decode(&self) -> Result<String> {
        Codec::default().decode_result(self)
    }

    /// Pretty JSON for download
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(millis / 1000.0).map_err(serde::de::Error::custom)
    }
}
