pub mod bits;
pub mod error;
pub mod huffman;
pub mod lz77;
pub mod progress;
pub mod result;
pub mod rle;

pub use error::{Error, ErrorKind, Result};
pub use huffman::{CodeTable, CodeTree, FrequencyTable, HuffmanCodec};
pub use lz77::{Lz77Codec, Lz77Config, Lz77Triple};
pub use progress::{NoProgress, ProgressEvent, ProgressLog, ProgressReporter, Stage};
pub use result::{compression_ratio, CompressionResult};
pub use rle::{RleCodec, RleConfig, RleToken};

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

/// The supported algorithms
///
/// Each variant's payload format is private to its codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Huffman,
    Rle,
    Lz77,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Huffman, Algorithm::Rle, Algorithm::Lz77];

    /// Lowercase tag used in results and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Huffman => "huffman",
            Algorithm::Rle => "rle",
            Algorithm::Lz77 => "lz77",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parse a tag case-insensitively
    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "huffman" => Ok(Algorithm::Huffman),
            "rle" => Ok(Algorithm::Rle),
            "lz77" => Ok(Algorithm::Lz77),
            _ => Err(Error::UnsupportedAlgorithm(tag.to_string())),
        }
    }
}

/// Configuration for all codecs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    pub lz77: Lz77Config,
    pub rle: RleConfig,
}

impl CodecConfig {
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.lz77.window_size = window_size;
        self
    }

    pub fn with_look_ahead_size(mut self, look_ahead_size: usize) -> Self {
        self.lz77.look_ahead_size = look_ahead_size;
        self
    }

    pub fn with_max_run(mut self, max_run: usize) -> Self {
        self.rle.max_run = max_run;
        self
    }

    pub fn with_literal_threshold(mut self, literal_threshold: usize) -> Self {
        self.rle.literal_threshold = literal_threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.lz77.validate()?;
        self.rle.validate()
    }
}

/// Dispatches encode and decode calls to the codec for an `Algorithm`
///
/// Holds only configuration; every call builds its own tables and buffers, so one `Codec` can
/// serve concurrent callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compress `input` with `algorithm`
    pub fn encode(
        &self,
        input: &str,
        algorithm: Algorithm,
        progress: &mut dyn ProgressReporter,
    ) -> Result<CompressionResult> {
        let result = match algorithm {
            Algorithm::Huffman => HuffmanCodec::new().encode(input, progress)?,
            Algorithm::Rle => RleCodec::new(self.config.rle).encode(input, progress)?,
            Algorithm::Lz77 => Lz77Codec::new(self.config.lz77).encode(input, progress)?,
        };
        debug!(
            "{}: {} -> {} bytes ({:.2}%) in {:.2?}",
            algorithm,
            result.original_size,
            result.compressed_size,
            result.compression_ratio,
            result.processing_time
        );
        Ok(result)
    }

    /// Decompress `payload` produced by `algorithm`
    ///
    /// Huffman payloads are not self-describing; use `decode_huffman` with the code table.
    pub fn decode(&self, payload: &str, algorithm: Algorithm) -> Result<String> {
        match algorithm {
            Algorithm::Huffman => Err(Error::HuffmanTableUnavailable),
            Algorithm::Rle => RleCodec::new(self.config.rle).decode(payload),
            Algorithm::Lz77 => Lz77Codec::new(self.config.lz77).decode(payload),
        }
    }

    /// Decompress a Huffman bit-string with its code table
    pub fn decode_huffman(&self, payload: &str, table: &CodeTable) -> Result<String> {
        HuffmanCodec::new().decode(payload, table)
    }

    /// Decompress a result's own payload, using its code table for Huffman
    pub fn decode_result(&self, result: &CompressionResult) -> Result<String> {
        match (result.algorithm, &result.code_table) {
            (Algorithm::Huffman, Some(table)) => self.decode_huffman(&result.compressed, table),
            (algorithm, _) => self.decode(&result.compressed, algorithm),
        }
    }
}

/// Compress `input` with the algorithm named by `algorithm` and default settings
pub fn encode(
    input: &str,
    algorithm: &str,
    progress: &mut dyn ProgressReporter,
) -> Result<CompressionResult> {
    Codec::default().encode(input, algorithm.parse()?, progress)
}

/// Decompress `payload` for the algorithm named by `algorithm` with default settings
///
/// Fails with `HuffmanTableUnavailable` for Huffman; see `decode_with_table`.
pub fn decode(payload: &str, algorithm: &str) -> Result<String> {
    Codec::default().decode(payload, algorithm.parse()?)
}

/// Decompress a Huffman payload with the table returned by its encode
pub fn decode_with_table(payload: &str, table: &CodeTable) -> Result<String> {
    Codec::default().decode_huffman(payload, table)
}
