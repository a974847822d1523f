use super::triple::Lz77Triple;
use crate::error::{Error, Result};

/// Replays triples into the symbols they encode
///
/// Decoding needs no window settings: a back-reference is valid whenever it points into output
/// already produced, so results encoded with any `Lz77Config` decode the same way.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lz77Decoder;

impl Lz77Decoder {
    pub fn new() -> Self {
        Self
    }

    /// Rebuild the original text
    ///
    /// Copies go one symbol at a time, so a copy longer than its offset repeats what it has
    /// just written. Every triple must produce at least one symbol, and only the last may omit
    /// its next symbol.
    pub fn decode(&self, triples: &[Lz77Triple]) -> Result<String> {
        let mut output: Vec<char> = Vec::new();
        let last = triples.len().saturating_sub(1);

        for (index, triple) in triples.iter().enumerate() {
            if triple.next.is_none() {
                if triple.length == 0 {
                    return Err(Error::EmptyTriple { index });
                }
                if index != last {
                    return Err(Error::MissingNextSymbol { index });
                }
            }

            if triple.length > 0 {
                if triple.offset == 0 || triple.offset > output.len() {
                    return Err(Error::InvalidBackReference {
                        offset: triple.offset,
                        available: output.len(),
                    });
                }

                let start = output.len() - triple.offset;
                output.reserve(triple.decoded_len());
                for i in 0..triple.length {
                    let symbol = output[start + i];
                    output.push(symbol);
                }
            }
            if let Some(symbol) = triple.next {
                output.push(symbol);
            }
        }

        Ok(output.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(triples: &[Lz77Triple]) -> Result<String> {
        Lz77Decoder::new().decode(triples)
    }

    #[test]
    fn test_overlapping_copy() {
        let triples = [Lz77Triple::literal('a'), Lz77Triple { offset: 1, length: 3, next: None }];
        assert_eq!(decode(&triples).unwrap(), "aaaa");
    }

    #[test]
    fn test_pattern_copy() {
        let triples = [
            Lz77Triple::literal('a'),
            Lz77Triple::literal('b'),
            Lz77Triple { offset: 2, length: 5, next: Some('!') },
        ];
        assert_eq!(decode(&triples).unwrap(), "abababa!");
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_accepts_copies_beyond_default_window() {
        // Produced by a 64-symbol look-ahead; the decoder does not need to know that
        let triples = [Lz77Triple::literal('x'), Lz77Triple { offset: 1, length: 64, next: None }];
        assert_eq!(decode(&triples).unwrap(), "x".repeat(65));
    }

    #[test]
    fn test_rejects_reference_before_start() {
        let triples = [Lz77Triple::literal('a'), Lz77Triple { offset: 2, length: 1, next: None }];
        assert!(matches!(
            decode(&triples),
            Err(Error::InvalidBackReference { offset: 2, available: 1 })
        ));
    }

    #[test]
    fn test_rejects_zero_offset_copy() {
        let triples = [Lz77Triple::literal('a'), Lz77Triple { offset: 0, length: 2, next: None }];
        assert!(matches!(decode(&triples), Err(Error::InvalidBackReference { offset: 0, .. })));
    }

    #[test]
    fn test_rejects_triple_without_data() {
        let triples = [
            Lz77Triple { offset: 0, length: 0, next: None },
            Lz77Triple::literal('a'),
        ];
        assert!(matches!(decode(&triples), Err(Error::EmptyTriple { index: 0 })));

        let trailing = [Lz77Triple::literal('a'), Lz77Triple { offset: 7, length: 0, next: None }];
        assert!(matches!(decode(&trailing), Err(Error::EmptyTriple { index: 1 })));
    }

    #[test]
    fn test_rejects_missing_next_before_end() {
        let triples = [
            Lz77Triple::literal('a'),
            Lz77Triple { offset: 1, length: 2, next: None },
            Lz77Triple::literal('b'),
        ];
        assert!(matches!(decode(&triples), Err(Error::MissingNextSymbol { index: 1 })));
    }
}
