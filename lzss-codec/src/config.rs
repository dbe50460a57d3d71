//! LZSS format constants and decoder limits.

/// LZSS configuration parameters.
///
/// The bitstream format itself is fixed: 4-bit lengths, 12-bit distances and
/// eight symbols per block. The only tunable is how much output the decoder
/// is allowed to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzssConfig {
    /// Upper bound on decompressed size, `None` for unbounded.
    pub max_output_size: Option<usize>,
}

impl LzssConfig {
    /// Shortest length worth encoding as a back-reference.
    pub const MIN_MATCH: usize = 3;

    /// Longest back-reference: 4-bit field plus `MIN_MATCH`.
    pub const MAX_MATCH: usize = 15 + Self::MIN_MATCH;

    /// Farthest back-reference: 12-bit field plus one.
    pub const WINDOW_SIZE: usize = 4095 + 1;

    /// One bucket per 2-byte prefix.
    pub const HASH_TABLE_SIZE: usize = 256 * 256;

    /// Symbols described by one control byte.
    pub const BLOCK_SYMBOLS: usize = 8;

    /// Unbounded decoding.
    pub const DEFAULT: Self = Self {
        max_output_size: None,
    };

    /// Create a configuration that caps decoded output at `limit` bytes.
    pub fn with_max_output(limit: usize) -> Self {
        Self {
            max_output_size: Some(limit),
        }
    }

    /// Worst-case compressed size for `input_len` bytes (all literals).
    pub fn max_compressed_size(input_len: usize) -> usize {
        input_len + input_len.div_ceil(Self::BLOCK_SYMBOLS)
    }
}

impl Default for LzssConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
