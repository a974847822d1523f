use log::{debug, trace};

use super::frequency::FrequencyTable;
use super::table::CodeTable;
use super::tree::CodeTree;
use crate::bits::BitWriter;
use crate::error::{Error, Result};
use crate::progress::{ProgressEvent, ProgressReporter, Stage};

/// Output of a Huffman encode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanEncoding {
    /// Concatenated codes as `'0'`/`'1'` characters
    pub bits: String,
    /// The same bits packed MSB-first, zero-padded to a whole byte
    pub packed: Vec<u8>,
    /// Number of meaningful bits in `packed`
    pub bit_len: usize,
    /// Table needed to decode `bits`
    pub table: CodeTable,
}

impl HuffmanEncoding {
    /// Packed payload bytes plus the serialized code table
    pub fn compressed_size(&self) -> Result<usize> {
        Ok(self.packed.len() + self.table.serialized_size()?)
    }
}

/// Huffman encoder for character streams
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanEncoder;

impl HuffmanEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode `input`, reporting each construction milestone
    pub fn encode(
        &self,
        input: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<HuffmanEncoding> {
        let frequencies = FrequencyTable::from_text(input);
        progress.report(&ProgressEvent::new(
            Stage::FrequencyTable,
            20,
            format!("counted {} distinct symbols", frequencies.len()),
        ));

        let tree = CodeTree::build(&frequencies);
        progress.report(&ProgressEvent::new(
            Stage::CodeTree,
            40,
            format!("built tree over {} leaves", tree.as_ref().map_or(0, CodeTree::leaf_count)),
        ));

        let table = tree.as_ref().map(CodeTable::from_tree).unwrap_or_default();
        progress.report(&ProgressEvent::new(
            Stage::CodeTable,
            60,
            format!("generated {} codes (longest {} bits)", table.len(), table.max_code_len()),
        ));
        for (symbol, code) in table.iter() {
            trace!("huffman code {:?} -> {}", symbol, code);
        }

        progress.report(&ProgressEvent::new(Stage::Encoding, 80, "encoding symbols"));
        let mut writer = BitWriter::with_capacity(input.len() / 2);
        let mut bits = String::with_capacity(input.len() * 2);
        for symbol in input.chars() {
            let code = table
                .get(symbol)
                .ok_or_else(|| Error::Internal(format!("no code for symbol {:?}", symbol)))?;
            writer.write_code(code);
            bits.push_str(code);
        }

        let bit_len = writer.bit_len();
        let packed = writer.finish();

        debug!(
            "huffman: {} symbols, {} distinct, {} bits ({} packed bytes)",
            frequencies.total(),
            table.len(),
            bit_len,
            packed.len()
        );

        Ok(HuffmanEncoding { bits, packed, bit_len, table })
    }
}
