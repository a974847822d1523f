pub mod token;

pub use token::{RleToken, ESCAPE, MAX_RUN};

use std::time::Instant;

use log::debug;

use crate::error::{Error, Result};
use crate::progress::{ProgressEvent, ProgressReporter, ProportionalProgress, Stage};
use crate::result::CompressionResult;
use crate::Algorithm;

/// Run-length encoding settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RleConfig {
    /// Longest run a single token may carry (1-255)
    pub max_run: usize,
    /// Runs longer than this always use the `(count)(symbol)` form (1-255)
    pub literal_threshold: usize,
}

impl RleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_run == 0 || self.max_run > MAX_RUN {
            return Err(Error::InvalidConfig(format!(
                "rle max_run must be in 1..={}, got {}",
                MAX_RUN, self.max_run
            )));
        }
        if self.literal_threshold == 0 || self.literal_threshold > MAX_RUN {
            return Err(Error::InvalidConfig(format!(
                "rle literal_threshold must be in 1..={}, got {}",
                MAX_RUN, self.literal_threshold
            )));
        }
        Ok(())
    }
}

impl Default for RleConfig {
    fn default() -> Self {
        Self { max_run: MAX_RUN, literal_threshold: 3 }
    }
}

/// Run-length codec over characters
///
/// Runs above the literal threshold become `(count)(symbol)`. Shorter repeated runs use that
/// form only for non-alphanumeric symbols, so ordinary doubled letters are never expanded.
/// Literal digits and `\` are escaped with `\`, which keeps every input decodable.
#[derive(Clone, Copy, Debug, Default)]
pub struct RleCodec {
    config: RleConfig,
}

impl RleCodec {
    pub fn new(config: RleConfig) -> Self {
        Self { config }
    }

    /// Split `input` into tokens, reporting progress as runs are consumed
    pub fn tokenize(&self, input: &str, progress: &mut dyn ProgressReporter) -> Vec<RleToken> {
        let symbols: Vec<char> = input.chars().collect();
        let mut tracker = ProportionalProgress::new(progress, symbols.len(), 0, 90);
        let mut tokens = Vec::new();
        let max_run = self.config.max_run.clamp(1, MAX_RUN);

        tracker.advance(0);
        let mut i = 0;
        while i < symbols.len() {
            let symbol = symbols[i];
            let mut run = 1;
            while run < max_run && i + run < symbols.len() && symbols[i + run] == symbol {
                run += 1;
            }

            tokens.push(self.classify(symbol, run));
            i += run;
            tracker.advance(i);
        }

        tokens
    }

    fn classify(&self, symbol: char, count: usize) -> RleToken {
        if count > self.config.literal_threshold || (count >= 2 && !symbol.is_alphanumeric()) {
            RleToken::Run { count, symbol }
        } else {
            RleToken::Literal { symbol, count }
        }
    }

    pub fn encode(
        &self,
        input: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<CompressionResult> {
        self.config.validate()?;
        let started = Instant::now();

        let tokens = self.tokenize(input, progress);
        let mut encoded = String::with_capacity(input.len());
        for token in &tokens {
            token.write_to(&mut encoded);
        }
        debug!(
            "rle: {} symbols -> {} tokens ({} runs)",
            input.chars().count(),
            tokens.len(),
            tokens.iter().filter(|t| matches!(t, RleToken::Run { .. })).count()
        );

        let compressed_size = encoded.len();
        let result = CompressionResult::assemble(
            Algorithm::Rle,
            input,
            encoded,
            compressed_size,
            started,
            None,
        );
        progress.report(&ProgressEvent::new(
            Stage::Complete,
            100,
            format!("{} bytes -> {} bytes", result.original_size, result.compressed_size),
        ));
        Ok(result)
    }

    /// Expand run markers back into the original text
    ///
    /// A maximal digit sequence is a count for the symbol after it; `\` makes the next symbol
    /// literal. Counts must be in 1..=255.
    pub fn decode(&self, payload: &str) -> Result<String> {
        let symbols: Vec<char> = payload.chars().collect();
        let mut output = String::with_capacity(payload.len());
        let mut i = 0;

        while i < symbols.len() {
            let c = symbols[i];
            if c.is_ascii_digit() {
                let start = i;
                while i < symbols.len() && symbols[i].is_ascii_digit() {
                    i += 1;
                }
                let digits: String = symbols[start..i].iter().collect();
                let count = match digits.parse::<usize>() {
                    Ok(count) if (1..=MAX_RUN).contains(&count) => count,
                    _ => return Err(Error::InvalidRunCount { count: digits, position: start }),
                };

                let (symbol, width) = read_symbol(&symbols, i)
                    .ok_or(Error::MissingRunSymbol { position: start })??;
                i += width;
                output.extend(std::iter::repeat(symbol).take(count));
            } else if c == ESCAPE {
                let (symbol, width) = read_symbol(&symbols, i)
                    .ok_or(Error::DanglingEscape { position: i })??;
                i += width;
                output.push(symbol);
            } else {
                output.push(c);
                i += 1;
            }
        }

        Ok(output)
    }
}

/// Read the (possibly escaped) symbol at `at`, returning it with the characters it spans
///
/// `None` when `at` is past the end.
fn read_symbol(symbols: &[char], at: usize) -> Option<Result<(char, usize)>> {
    let &first = symbols.get(at)?;
    if first != ESCAPE {
        return Some(Ok((first, 1)));
    }
    Some(match symbols.get(at + 1) {
        Some(&escaped) => Ok((escaped, 2)),
        None => Err(Error::DanglingEscape { position: at }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{NoProgress, ProgressLog};

    fn encode(input: &str) -> String {
        RleCodec::default().encode(input, &mut NoProgress).unwrap().compressed
    }

    fn decode(payload: &str) -> Result<String> {
        RleCodec::default().decode(payload)
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(encode("aaaabbbccc"), "4abbbccc");
        assert_eq!(decode("4abbbccc").unwrap(), "aaaabbbccc");
    }

    #[test]
    fn test_short_symbol_runs_use_pairs() {
        assert_eq!(encode("--"), "2-");
        assert_eq!(encode("!!!x"), "3!x");
        assert_eq!(encode("aa"), "aa");
        assert_eq!(encode("a"), "a");
    }

    #[test]
    fn test_long_runs_split_at_255() {
        let input = "z".repeat(300);
        assert_eq!(encode(&input), "255z45z");
        assert_eq!(decode("255z45z").unwrap(), input);
    }

    #[test]
    fn test_max_run_config() {
        let codec = RleCodec::new(RleConfig { max_run: 10, ..RleConfig::default() });
        let result = codec.encode(&"k".repeat(25), &mut NoProgress).unwrap();
        assert_eq!(result.compressed, "10k10k5k");
        assert!(RleCodec::new(RleConfig { max_run: 0, ..RleConfig::default() })
            .encode("k", &mut NoProgress)
            .is_err());
    }

    #[test]
    fn test_literal_threshold_config() {
        let eager = RleCodec::new(RleConfig { literal_threshold: 1, ..RleConfig::default() });
        let result = eager.encode("aabbbc", &mut NoProgress).unwrap();
        assert_eq!(result.compressed, "2a3bc");
        assert_eq!(RleCodec::default().decode(&result.compressed).unwrap(), "aabbbc");

        let lazy = RleCodec::new(RleConfig { literal_threshold: 5, ..RleConfig::default() });
        assert_eq!(lazy.encode("aaaaa", &mut NoProgress).unwrap().compressed, "aaaaa");

        for literal_threshold in [0, 256] {
            let config = RleConfig { literal_threshold, ..RleConfig::default() };
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
            assert!(RleCodec::new(config).encode("a", &mut NoProgress).is_err());
        }
    }

    #[test]
    fn test_digits_round_trip() {
        for input in ["2024", "a11111b", "5\\\\\\x", "9999999", "x\\"] {
            assert_eq!(decode(&encode(input)).unwrap(), input, "input {:?}", input);
        }
        assert_eq!(encode("7777"), "4\\7");
        assert_eq!(encode("12"), "\\1\\2");
    }

    #[test]
    fn test_unicode_round_trip() {
        let input = "ééééé🦀🦀 naïve";
        assert_eq!(encode(input), "5é2🦀 naïve");
        assert_eq!(decode(&encode(input)).unwrap(), input);
    }

    #[test]
    fn test_empty() {
        let result = RleCodec::default().encode("", &mut NoProgress).unwrap();
        assert_eq!(result.original_size, 0);
        assert_eq!(result.compressed, "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode("12"), Err(Error::MissingRunSymbol { position: 0 })));
        assert!(matches!(decode("ab0c"), Err(Error::InvalidRunCount { position: 2, .. })));
        assert!(matches!(decode("256a"), Err(Error::InvalidRunCount { .. })));
        assert!(matches!(decode("abc\\"), Err(Error::DanglingEscape { position: 3 })));
        assert!(matches!(decode("3\\"), Err(Error::DanglingEscape { position: 1 })));
        assert!(decode(&"9".repeat(40)).is_err());
    }

    #[test]
    fn test_progress_proportional() {
        let mut log = ProgressLog::default();
        RleCodec::default().encode(&"ab".repeat(200), &mut log).unwrap();
        let pcts: Vec<u8> = log.events.iter().map(|e| e.percentage).collect();
        assert_eq!(pcts.first(), Some(&0));
        assert!(pcts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(&pcts[pcts.len() - 2..], &[90, 100]);
    }
}
