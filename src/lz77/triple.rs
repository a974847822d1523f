use serde::{Deserialize, Serialize};

/// Wire form of a triple: `[offset, length, next]`
type RawTriple = (usize, usize, Option<char>);

/// One LZ77 output unit: copy `length` symbols from `offset` back, then emit `next`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTriple", into = "RawTriple")]
pub struct Lz77Triple {
    /// Distance back from the current output end (0 when nothing is copied)
    pub offset: usize,
    /// Number of symbols copied
    pub length: usize,
    /// Literal following the copy; absent only when the input ends inside the match
    pub next: Option<char>,
}

impl Lz77Triple {
    /// A triple that copies nothing and emits `symbol`
    pub fn literal(symbol: char) -> Self {
        Self { offset: 0, length: 0, next: Some(symbol) }
    }

    pub fn is_literal(&self) -> bool {
        self.length == 0
    }

    /// Number of symbols this triple expands to
    pub fn decoded_len(&self) -> usize {
        self.length + self.next.is_some() as usize
    }
}

impl From<RawTriple> for Lz77Triple {
    fn from((offset, length, next): RawTriple) -> Self {
        Self { offset, length, next }
    }
}

impl From<Lz77Triple> for RawTriple {
    fn from(triple: Lz77Triple) -> Self {
        (triple.offset, triple.length, triple.next)
    }
}
