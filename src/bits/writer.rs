/// Bit-level writer for packed Huffman output
///
/// Writes bits MSB-first: the first bit written lands in bit 7 of the first byte.
pub struct BitWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
    /// Current byte being built
    current_byte: u8,
    /// Bits written to current byte (0-7)
    bits_in_byte: u8,
    /// Total bits written
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), current_byte: 0, bits_in_byte: 0, bit_len: 0 }
    }

    /// Write a single bit
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current_byte |= (bit as u8) << (7 - self.bits_in_byte);
        self.bits_in_byte += 1;
        self.bit_len += 1;

        if self.bits_in_byte == 8 {
            self.output.push(self.current_byte);
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Write a textual code such as `"0110"`, one bit per character
    ///
    /// Any character other than `'1'` writes a zero bit; codes come from a `CodeTable`,
    /// which only ever holds `'0'` and `'1'`.
    pub fn write_code(&mut self, code: &str) {
        for c in code.chars() {
            self.write_bit(c == '1');
        }
    }

    /// Total bits written so far
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Current output length in bytes (including partial byte)
    pub fn len(&self) -> usize {
        self.output.len() + if self.bits_in_byte > 0 { 1 } else { 0 }
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Finish, zero-padding the last byte, and return the output bytes
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_in_byte > 0 {
            self.output.push(self.current_byte);
        }
        self.output
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
