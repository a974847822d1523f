pub mod decoder;
pub mod encoder;
pub mod triple;

pub use decoder::Lz77Decoder;
pub use encoder::{find_longest_match, Lz77Encoder};
pub use triple::Lz77Triple;

use std::time::Instant;

use crate::error::{Error, Result};
use crate::progress::{ProgressEvent, ProgressReporter, Stage};
use crate::result::CompressionResult;
use crate::Algorithm;

/// Default history length searched for matches
pub const DEFAULT_WINDOW_SIZE: usize = 4096;

/// Default longest match
pub const DEFAULT_LOOK_AHEAD_SIZE: usize = 18;

/// Size units charged per triple (packed offset, length and symbol)
pub const TRIPLE_COST: usize = 6;

/// LZ77 window settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lz77Config {
    /// Symbols of history searched for a match
    pub window_size: usize,
    /// Longest match considered
    pub look_ahead_size: usize,
}

impl Lz77Config {
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::InvalidConfig("lz77 window_size must be at least 1".to_string()));
        }
        if self.look_ahead_size == 0 {
            return Err(Error::InvalidConfig(
                "lz77 look_ahead_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self { window_size: DEFAULT_WINDOW_SIZE, look_ahead_size: DEFAULT_LOOK_AHEAD_SIZE }
    }
}

/// Simplified LZ77 over characters
///
/// The payload is the triple list as compact JSON. Its size is estimated at a fixed
/// `TRIPLE_COST` per triple rather than measured, so short inputs with few repeats report a
/// negative ratio.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lz77Codec {
    config: Lz77Config,
}

impl Lz77Codec {
    pub fn new(config: Lz77Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Lz77Config {
        &self.config
    }

    pub fn encode(
        &self,
        input: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<CompressionResult> {
        self.config.validate()?;
        let started = Instant::now();

        let symbols: Vec<char> = input.chars().collect();
        let triples = Lz77Encoder::new(self.config).encode(&symbols, progress);
        let payload = serde_json::to_string(&triples)?;

        let result = CompressionResult::assemble(
            Algorithm::Lz77,
            input,
            payload,
            triples.len() * TRIPLE_COST,
            started,
            None,
        );
        progress.report(&ProgressEvent::new(
            Stage::Complete,
            100,
            format!(
                "{} triples, {} bytes -> {} units",
                triples.len(),
                result.original_size,
                result.compressed_size
            ),
        ));
        Ok(result)
    }

    /// Parse a JSON triple list and replay it
    ///
    /// The window settings only shape encoding; any well-formed triple list decodes.
    pub fn decode(&self, payload: &str) -> Result<String> {
        let triples: Vec<Lz77Triple> = serde_json::from_str(payload)?;
        Lz77Decoder::new().decode(&triples)
    }
}
