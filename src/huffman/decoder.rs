use std::collections::HashMap;

use super::table::CodeTable;
use crate::bits::BitReader;
use crate::error::{Error, Result};

/// Greedy prefix decoder driven by a `CodeTable`
pub struct HuffmanDecoder {
    /// Code to symbol
    lookup: HashMap<String, char>,
    /// Longest code in the table; a pending prefix this long that matches nothing is invalid
    max_bits: usize,
}

impl HuffmanDecoder {
    /// Build a decoder, rejecting tables that could not have come from a code tree
    pub fn new(table: &CodeTable) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(table.len());
        for (symbol, code) in table.iter() {
            if code.is_empty() {
                return Err(Error::InvalidCodeTable(format!("empty code for {:?}", symbol)));
            }
            if let Some(bad) = code.chars().find(|&c| c != '0' && c != '1') {
                return Err(Error::InvalidCodeTable(format!(
                    "code for {:?} contains {:?}",
                    symbol, bad
                )));
            }
            if lookup.insert(code.to_string(), symbol).is_some() {
                return Err(Error::InvalidCodeTable(format!("duplicate code {}", code)));
            }
        }
        if !table.is_prefix_free() {
            return Err(Error::InvalidCodeTable("codes are not prefix-free".to_string()));
        }

        Ok(Self { lookup, max_bits: table.max_code_len() })
    }

    /// Decode a `'0'`/`'1'` bit-string
    pub fn decode(&self, bits: &str) -> Result<String> {
        self.decode_bits(bits.chars().enumerate().map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(Error::InvalidBit { found, position }),
        }))
    }

    /// Decode the first `bit_len` bits of MSB-first packed bytes
    pub fn decode_packed(&self, packed: &[u8], bit_len: usize) -> Result<String> {
        self.decode_bits(BitReader::new(packed, bit_len)?.map(Ok))
    }

    fn decode_bits<I: Iterator<Item = Result<bool>>>(&self, bits: I) -> Result<String> {
        let mut output = String::new();
        let mut pending = String::with_capacity(self.max_bits);
        let mut code_start = 0;

        for (position, bit) in bits.enumerate() {
            pending.push(if bit? { '1' } else { '0' });

            if let Some(&symbol) = self.lookup.get(&pending) {
                output.push(symbol);
                pending.clear();
                code_start = position + 1;
            } else if pending.len() >= self.max_bits {
                return Err(Error::UnmatchedHuffmanCode { position: code_start });
            }
        }

        if !pending.is_empty() {
            return Err(Error::TruncatedHuffmanCode { bits: pending.len() });
        }
        Ok(output)
    }
}
