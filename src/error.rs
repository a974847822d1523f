use thiserror::Error;

/// Coarse failure classes callers present to users
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown algorithm tag at encode or decode time
    UnsupportedAlgorithm,
    /// A compressed payload could not be decoded
    MalformedCompressedInput,
    /// A Huffman payload was handed to a decoder without its code table
    HuffmanTableUnavailable,
    /// Codec configuration out of range
    InvalidConfig,
    /// A broken invariant inside the crate
    Internal,
}

#[derive(Error, Debug)]
pub enum Error {
    // Dispatch errors
    #[error("Unsupported algorithm: {0:?} (expected huffman, rle or lz77)")]
    UnsupportedAlgorithm(String),

    #[error("Huffman payload cannot be decoded without its code table")]
    HuffmanTableUnavailable,

    // Huffman stream errors
    #[error("Invalid bit {found:?} at position {position} (expected '0' or '1')")]
    InvalidBit { found: char, position: usize },

    #[error("No Huffman code matches the bits starting at position {position}")]
    UnmatchedHuffmanCode { position: usize },

    #[error("Huffman stream ends inside a code ({bits} dangling bits)")]
    TruncatedHuffmanCode { bits: usize },

    #[error("Packed Huffman stream holds {available} bits, {requested} requested")]
    BitLengthOverflow { requested: usize, available: usize },

    #[error("Invalid Huffman code table: {0}")]
    InvalidCodeTable(String),

    // RLE errors
    #[error("Run count at position {position} is not followed by a symbol")]
    MissingRunSymbol { position: usize },

    #[error("Invalid run count {count:?} at position {position}")]
    InvalidRunCount { count: String, position: usize },

    #[error("Escape character at end of input (position {position})")]
    DanglingEscape { position: usize },

    // LZ77 errors
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Back-reference offset {offset} exceeds available output {available}")]
    InvalidBackReference { offset: usize, available: usize },

    #[error("Triple {index} copies nothing and has no next symbol")]
    EmptyTriple { index: usize },

    #[error("Triple {index} has no next symbol but is not the last triple")]
    MissingNextSymbol { index: usize },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Classify this error into the caller-facing taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            Error::HuffmanTableUnavailable => ErrorKind::HuffmanTableUnavailable,
            Error::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Error::Internal(_) => ErrorKind::Internal,
            Error::InvalidBit { .. }
            | Error::UnmatchedHuffmanCode { .. }
            | Error::TruncatedHuffmanCode { .. }
            | Error::BitLengthOverflow { .. }
            | Error::InvalidCodeTable(_)
            | Error::MissingRunSymbol { .. }
            | Error::InvalidRunCount { .. }
            | Error::DanglingEscape { .. }
            | Error::Json(_)
            | Error::InvalidBackReference { .. }
            | Error::EmptyTriple { .. }
            | Error::MissingNextSymbol { .. } => ErrorKind::MalformedCompressedInput,
        }
    }

    /// Whether this error means the compressed input itself is bad
    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::MalformedCompressedInput
    }
}

pub type Result<T> = std::result::Result<T, Error>;
