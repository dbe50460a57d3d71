//! Block packing.
//!
//! A block is one control byte followed by up to eight symbols. Bit 7 of the
//! control byte describes the first symbol; a set bit marks a literal.

use crate::config::LzssConfig;
use crate::token::pack_reference;

/// Largest possible block: control byte plus eight 2-byte references.
const MAX_BLOCK_LEN: usize = 1 + 2 * LzssConfig::BLOCK_SYMBOLS;

/// Accumulates symbols into blocks and appends full blocks to an output.
#[derive(Debug)]
pub struct BlockWriter {
    /// Control byte followed by payload.
    block: [u8; MAX_BLOCK_LEN],
    /// Bytes used in `block`, including the control byte.
    len: usize,
    /// Symbols packed into the current block.
    symbols: usize,
    /// Completed blocks.
    output: Vec<u8>,
}

impl BlockWriter {
    /// Create a writer whose output buffer starts with `capacity` bytes reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            block: [0; MAX_BLOCK_LEN],
            len: 1,
            symbols: 0,
            output: Vec::with_capacity(capacity),
        }
    }

    /// Append a literal byte.
    pub fn push_literal(&mut self, byte: u8) {
        self.block[0] |= 0x80u8 >> self.symbols;
        self.block[self.len] = byte;
        self.len += 1;
        self.end_symbol();
    }

    /// Append a back-reference.
    pub fn push_reference(&mut self, length: usize, distance: usize) {
        let [b0, b1] = pack_reference(length, distance);
        self.block[self.len] = b0;
        self.block[self.len + 1] = b1;
        self.len += 2;
        self.end_symbol();
    }

    fn end_symbol(&mut self) {
        self.symbols += 1;
        if self.symbols == LzssConfig::BLOCK_SYMBOLS {
            self.flush();
        }
    }

    /// Write out the pending block, if it holds any symbols.
    fn flush(&mut self) {
        if self.symbols == 0 {
            return;
        }

        self.output.extend_from_slice(&self.block[..self.len]);
        tracing::trace!(
            control = self.block[0],
            bytes = self.len,
            symbols = self.symbols,
            "flushed block"
        );

        self.block[0] = 0;
        self.len = 1;
        self.symbols = 0;
    }

    /// Flush any partial block and return the packed stream.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}
