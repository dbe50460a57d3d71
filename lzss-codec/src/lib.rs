//! # LZSS Codec
//!
//! Pure Rust LZSS (Lempel-Ziv-Storer-Szymanski) compression with a 4KB
//! window.
//!
//! ## Format
//!
//! The compressed stream is a sequence of blocks with no header, length
//! prefix or checksum:
//!
//! - **Control byte**: one flag per symbol, most significant bit first.
//!   `1` = literal, `0` = back-reference.
//! - **Literal**: one raw byte.
//! - **Back-reference**: two bytes, a 4-bit length (3..=18) and a 12-bit
//!   distance (1..=4096).
//!
//! Each block holds up to eight symbols; only the last block may be short.
//!
//! ## Matching
//!
//! The encoder indexes every 2-byte prefix of the input in a 65536-entry
//! hash table, chaining each position back to the previous occurrence of
//! the same prefix. At every position it walks that chain within the window
//! and takes the longest match (nearest on ties). Matches shorter than three
//! bytes are emitted as literals.
//!
//! ## Example
//!
//! ```rust
//! use lzss_codec::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress(original);
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Malformed input
//!
//! Decompression validates the stream. Truncated symbols and back-references
//! that reach before the start of the output are reported as [`LzssError`]s:
//!
//! ```rust
//! use lzss_codec::{LzssError, decompress};
//!
//! // One literal, then a reference 2 bytes back.
//! let corrupt = [0b1000_0000, b'A', 0x00, 0x01];
//! assert!(matches!(
//!     decompress(&corrupt),
//!     Err(LzssError::InvalidDistance { .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod block;
mod config;
mod decoder;
mod encoder;
mod error;
mod match_finder;
mod stats;
mod token;

pub use config::LzssConfig;
pub use decoder::LzssDecoder;
pub use encoder::LzssEncoder;
pub use error::{LzssError, Result};
pub use match_finder::{MatchCandidate, MatchFinder, link_matches};
pub use stats::CompressionStats;
pub use token::{LzssToken, pack_reference, unpack_reference};

/// Compress data with LZSS.
///
/// # Example
///
/// ```rust
/// use lzss_codec::compress;
///
/// let compressed = compress(&[0u8; 10]);
/// assert_eq!(compressed, [0x80, 0x00, 0x60, 0x00]);
/// ```
pub fn compress(data: &[u8]) -> Vec<u8> {
    LzssEncoder::new().encode(data)
}

/// Compress data with LZSS and report what the encoder emitted.
///
/// # Example
///
/// ```rust
/// use lzss_codec::compress_with_stats;
///
/// let (compressed, stats) = compress_with_stats(b"abcabcabcabc");
/// assert_eq!(stats.output_size, compressed.len());
/// assert_eq!(stats.literals, 3);
/// ```
pub fn compress_with_stats(data: &[u8]) -> (Vec<u8>, CompressionStats) {
    let mut encoder = LzssEncoder::new();
    let compressed = encoder.encode(data);
    (compressed, *encoder.stats())
}

/// Decompress an LZSS stream.
///
/// This is equivalent to `decompress_with_config(data, &LzssConfig::DEFAULT)`.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decompress_with_config(data, &LzssConfig::DEFAULT)
}

/// Decompress an LZSS stream with the given limits.
///
/// # Example
///
/// ```rust
/// use lzss_codec::{LzssConfig, LzssError, compress, decompress_with_config};
///
/// let compressed = compress(&[0u8; 1000]);
/// let config = LzssConfig::with_max_output(100);
/// assert!(matches!(
///     decompress_with_config(&compressed, &config),
///     Err(LzssError::OutputLimitExceeded { limit: 100 })
/// ));
/// ```
pub fn decompress_with_config(data: &[u8], config: &LzssConfig) -> Result<Vec<u8>> {
    LzssDecoder::new(*config).decode(data)
}
