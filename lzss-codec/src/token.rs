//! LZSS tokens and the 2-byte back-reference encoding.
//!
//! A back-reference packs into 16 bits:
//!
//! ```text
//! byte0: LLLL DDDD    byte1: DDDD DDDD
//!
//! L = length - 3 (0..=15)
//! D = distance - 1 (0..=4095), high nibble first
//! ```

use crate::config::LzssConfig;

/// LZSS token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzssToken {
    /// A literal byte.
    Literal(u8),
    /// A match reference to previously emitted data.
    Match {
        /// Number of bytes to copy (3..=18).
        length: u16,
        /// Distance back into the output (1..=4096).
        distance: u16,
    },
}

impl LzssToken {
    /// Payload bytes this token occupies in a block.
    pub fn encoded_len(&self) -> usize {
        match self {
            LzssToken::Literal(_) => 1,
            LzssToken::Match { .. } => 2,
        }
    }

    /// Number of output bytes this token expands to.
    pub fn expanded_len(&self) -> usize {
        match self {
            LzssToken::Literal(_) => 1,
            LzssToken::Match { length, .. } => *length as usize,
        }
    }

    /// Whether this token is a literal (control bit set).
    pub fn is_literal(&self) -> bool {
        matches!(self, LzssToken::Literal(_))
    }
}

/// Pack a back-reference into its two payload bytes.
///
/// `length` must be in `MIN_MATCH..=MAX_MATCH` and `distance` in
/// `1..=WINDOW_SIZE`.
#[inline]
pub fn pack_reference(length: usize, distance: usize) -> [u8; 2] {
    debug_assert!((LzssConfig::MIN_MATCH..=LzssConfig::MAX_MATCH).contains(&length));
    debug_assert!((1..=LzssConfig::WINDOW_SIZE).contains(&distance));

    let len_field = length - LzssConfig::MIN_MATCH;
    let dist_field = distance - 1;
    [
        ((len_field << 4) | (dist_field >> 8)) as u8,
        (dist_field & 0xFF) as u8,
    ]
}

/// Unpack two payload bytes into `(length, distance)`.
#[inline]
pub fn unpack_reference(byte0: u8, byte1: u8) -> (usize, usize) {
    let length = (byte0 >> 4) as usize + LzssConfig::MIN_MATCH;
    let distance = (((byte0 & 0x0F) as usize) << 8) + byte1 as usize + 1;
    (length, distance)
}
