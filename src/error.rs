//! Error types for Huffman encoding and decoding.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;

/// Errors that can occur while encoding or decoding a file.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Opening, reading, writing or flushing one of the files failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The frequency side file does not follow the `bbbbbbbb:count ` format.
    #[error("malformed frequency table at byte {offset}: {reason}")]
    MalformedFrequencyTable { offset: usize, reason: String },

    /// A symbol appears more than once in the frequency table.
    #[error("symbol 0x{0:02x} appears more than once in the frequency table")]
    DuplicateSymbol(u8),

    /// A symbol is listed with a count of zero.
    #[error("symbol 0x{0:02x} has a zero count")]
    ZeroCount(u8),

    /// The sum of all counts does not fit in 64 bits.
    #[error("frequency counts overflow a 64-bit total")]
    CountOverflow,

    /// An input byte has no entry in the code table.
    #[error("byte 0x{0:02x} has no code in the code table")]
    MissingCode(u8),

    /// The encoded stream ran out of bits before every symbol was decoded.
    #[error("encoded stream truncated: decoded {decoded} of {expected} symbols")]
    TruncatedStream { decoded: u64, expected: u64 },

    /// A bit that does not belong to any code.
    #[error("invalid code bit at bit position {position}")]
    InvalidCode { position: usize },

    /// A padding bit after the last symbol is set.
    #[error("non-zero padding bit at bit position {position}")]
    NonZeroPadding { position: usize },

    /// Whole bytes of data remain after the last expected symbol.
    #[error("encoded stream has {0} unused bits after the last symbol")]
    TrailingBits(usize),

    /// Not enough bits remaining in input.
    #[error("not enough bits remaining in input")]
    Underflow,
}

impl HuffmanError {
    /// Create an I/O error tagged with the file it happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a malformed side file error at a byte offset.
    pub fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedFrequencyTable {
            offset,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuffmanError::io(
            "missing.bin",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.bin"));

        let err = HuffmanError::malformed(11, "expected ':'");
        assert!(err.to_string().contains("at byte 11"));

        let err = HuffmanError::DuplicateSymbol(0x41);
        assert!(err.to_string().contains("0x41"));

        let err = HuffmanError::ZeroCount(0x0a);
        assert!(err.to_string().contains("zero count"));

        let err = HuffmanError::CountOverflow;
        assert!(err.to_string().contains("overflow"));

        let err = HuffmanError::MissingCode(0xff);
        assert!(err.to_string().contains("0xff"));

        let err = HuffmanError::TruncatedStream {
            decoded: 3,
            expected: 12,
        };
        assert!(err.to_string().contains("3 of 12"));

        let err = HuffmanError::InvalidCode { position: 7 };
        assert!(err.to_string().contains("position 7"));

        let err = HuffmanError::NonZeroPadding { position: 19 };
        assert!(err.to_string().contains("padding bit at bit position 19"));

        let err = HuffmanError::TrailingBits(9);
        assert!(err.to_string().contains("9 unused bits"));

        let err = HuffmanError::Underflow;
        assert!(err.to_string().contains("not enough bits"));
    }

    #[test]
    fn test_io_source_is_kept() {
        use std::error::Error as _;

        let err = HuffmanError::io(
            "out.huf",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
    }
}
