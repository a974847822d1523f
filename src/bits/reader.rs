use crate::error::{Error, Result};

/// Bit-level reader over packed Huffman output
///
/// Reads bits MSB-first, stopping at `bit_len` so the zero padding of the last byte is never
/// mistaken for code bits.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Number of meaningful bits in `data`
    bit_len: usize,
    /// Next bit to read
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `bit_len` bits of `data`
    pub fn new(data: &'a [u8], bit_len: usize) -> Result<Self> {
        let available = data.len() * 8;
        if bit_len > available {
            return Err(Error::BitLengthOverflow { requested: bit_len, available });
        }
        Ok(Self { data, bit_len, position: 0 })
    }

    /// Read the next bit, or `None` once `bit_len` bits have been read
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.position >= self.bit_len {
            return None;
        }
        let byte = self.data[self.position / 8];
        let bit = (byte >> (7 - (self.position % 8))) & 1 == 1;
        self.position += 1;
        Some(bit)
    }

    /// Bits consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bits left to read
    pub fn remaining(&self) -> usize {
        self.bit_len - self.position
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
