//! LZSS-specific error types.

use thiserror::Error;

/// LZSS decompression errors.
///
/// Compression cannot fail, so every variant here describes a problem with
/// a compressed stream or with the I/O feeding it.
#[derive(Debug, Error)]
pub enum LzssError {
    /// The stream ended in the middle of a symbol.
    #[error("Unexpected end of data at offset {position}: need {needed} more byte(s)")]
    UnexpectedEof {
        /// Input offset of the truncated symbol.
        position: usize,
        /// Number of bytes missing.
        needed: usize,
    },

    /// A back-reference points before the start of the output.
    #[error(
        "Invalid back-reference distance {distance} at offset {position}: only {history_size} byte(s) decoded"
    )]
    InvalidDistance {
        /// The distance read from the stream.
        distance: usize,
        /// Input offset of the back-reference.
        position: usize,
        /// Output produced so far.
        history_size: usize,
    },

    /// Decoded output would grow past the configured limit.
    #[error("Decompressed output exceeds limit of {limit} bytes")]
    OutputLimitExceeded {
        /// The configured `max_output_size`.
        limit: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for LZSS operations.
pub type Result<T> = std::result::Result<T, LzssError>;

impl LzssError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(position: usize, needed: usize) -> Self {
        Self::UnexpectedEof { position, needed }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, position: usize, history_size: usize) -> Self {
        Self::InvalidDistance {
            distance,
            position,
            history_size,
        }
    }

    /// Create an output limit error.
    pub fn output_limit(limit: usize) -> Self {
        Self::OutputLimitExceeded { limit }
    }
}
