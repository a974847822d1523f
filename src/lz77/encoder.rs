use log::{debug, trace};

use super::triple::Lz77Triple;
use super::Lz77Config;
use crate::progress::{ProgressReporter, ProportionalProgress};

/// Longest match for `symbols[pos..]` inside the window before `pos`
///
/// Returns `(offset, length)`; `(0, 0)` when nothing matches. Every window start is tried, and
/// a match may run past `pos` into the look-ahead itself (the decoder copies one symbol at a
/// time, so it reads what it has just written). On equal lengths the smallest offset wins.
///
/// This is a brute-force search, O(window * look_ahead) per position.
pub fn find_longest_match(
    symbols: &[char],
    pos: usize,
    window_size: usize,
    look_ahead_size: usize,
) -> (usize, usize) {
    let max_len = look_ahead_size.min(symbols.len().saturating_sub(pos));
    let window_start = pos.saturating_sub(window_size);
    let mut best = (0, 0);

    for start in (window_start..pos).rev() {
        let mut length = 0;
        while length < max_len && symbols[start + length] == symbols[pos + length] {
            length += 1;
        }
        if length > best.1 {
            best = (pos - start, length);
            if length == max_len {
                break;
            }
        }
    }

    best
}

/// Sliding-window LZ77 encoder
pub struct Lz77Encoder {
    config: Lz77Config,
}

impl Lz77Encoder {
    pub fn new(config: Lz77Config) -> Self {
        Self { config }
    }

    /// Encode `symbols` into triples
    ///
    /// The cursor moves past each match and the literal after it, so every triple consumes at
    /// least one symbol.
    pub fn encode(
        &self,
        symbols: &[char],
        progress: &mut dyn ProgressReporter,
    ) -> Vec<Lz77Triple> {
        let mut tracker = ProportionalProgress::new(progress, symbols.len(), 0, 90);
        let mut triples = Vec::new();
        let mut pos = 0;

        tracker.advance(0);
        while pos < symbols.len() {
            let (offset, length) = find_longest_match(
                symbols,
                pos,
                self.config.window_size,
                self.config.look_ahead_size,
            );
            let next = symbols.get(pos + length).copied();
            let triple = Lz77Triple { offset, length, next };
            trace!("lz77 @{}: {:?}", pos, triple);

            pos += triple.decoded_len().max(1);
            triples.push(triple);
            tracker.advance(pos);
        }

        debug!(
            "lz77: {} symbols -> {} triples ({} back-references)",
            symbols.len(),
            triples.len(),
            triples.iter().filter(|t| !t.is_literal()).count()
        );
        triples
    }
}
