//! LZSS decoder (decompression).
//!
//! The decoder validates every symbol against the input and the output
//! produced so far. A truncated stream or a back-reference reaching before
//! the start of the output is reported as an error instead of producing
//! garbage; well-formed streams decode exactly as the format describes.

use crate::config::LzssConfig;
use crate::error::{LzssError, Result};
use crate::token::{LzssToken, unpack_reference};

/// LZSS decoder for decompression.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzssDecoder {
    /// Output limits.
    config: LzssConfig,
}

impl LzssDecoder {
    /// Create a new LZSS decoder with the given configuration.
    pub fn new(config: LzssConfig) -> Self {
        Self { config }
    }

    /// The decoder configuration.
    pub fn config(&self) -> &LzssConfig {
        &self.config
    }

    /// Decode an LZSS stream.
    ///
    /// A control byte is read before every group of eight symbols. Bits are
    /// consumed most significant first; a set bit is a literal, a clear bit a
    /// 2-byte back-reference. Decoding stops when the input is exhausted, so
    /// unused bits of the final control byte are ignored.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(self.initial_capacity(input.len()));

        let mut pos = 0;
        let mut control = 0u8;
        let mut symbol = LzssConfig::BLOCK_SYMBOLS;

        while pos < input.len() {
            if symbol == LzssConfig::BLOCK_SYMBOLS {
                control = input[pos];
                pos += 1;
                symbol = 0;
            }

            if control & (0x80u8 >> symbol) != 0 {
                let byte = *input
                    .get(pos)
                    .ok_or_else(|| LzssError::unexpected_eof(pos, 1))?;
                self.reserve(&output, 1)?;
                output.push(byte);
                pos += 1;
            } else {
                let (byte0, byte1) = match input.get(pos..pos + 2) {
                    Some(&[b0, b1]) => (b0, b1),
                    _ => return Err(LzssError::unexpected_eof(pos, pos + 2 - input.len())),
                };
                let (length, distance) = unpack_reference(byte0, byte1);
                self.copy_match(&mut output, length, distance, pos)?;
                pos += 2;
            }

            symbol += 1;
        }

        tracing::debug!(input = input.len(), output = output.len(), "lzss decode");
        Ok(output)
    }

    /// Replay a token sequence into a fresh output buffer.
    ///
    /// Token positions in errors are token indices rather than byte offsets.
    pub fn decode_tokens(&self, tokens: &[LzssToken]) -> Result<Vec<u8>> {
        let mut output = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            match *token {
                LzssToken::Literal(byte) => {
                    self.reserve(&output, 1)?;
                    output.push(byte);
                }
                LzssToken::Match { length, distance } => {
                    self.copy_match(&mut output, length as usize, distance as usize, index)?;
                }
            }
        }

        Ok(output)
    }

    /// Append `length` bytes copied from `distance` bytes back.
    ///
    /// Bytes are copied one at a time, front to back. When `distance` is
    /// smaller than `length` the copy reads bytes it has just written, which
    /// repeats the last `distance` bytes as a run.
    fn copy_match(
        &self,
        output: &mut Vec<u8>,
        length: usize,
        distance: usize,
        position: usize,
    ) -> Result<()> {
        if distance == 0 || distance > output.len() {
            return Err(LzssError::invalid_distance(distance, position, output.len()));
        }
        self.reserve(output, length)?;

        for _ in 0..length {
            let byte = output[output.len() - distance];
            output.push(byte);
        }

        Ok(())
    }

    /// Check the output limit before growing by `additional` bytes.
    fn reserve(&self, output: &[u8], additional: usize) -> Result<()> {
        match self.config.max_output_size {
            Some(limit) if output.len() + additional > limit => {
                Err(LzssError::output_limit(limit))
            }
            _ => Ok(()),
        }
    }

    /// Initial output capacity: twice the input, clamped to the limit.
    fn initial_capacity(&self, input_len: usize) -> usize {
        let estimate = input_len.saturating_mul(2);
        match self.config.max_output_size {
            Some(limit) => estimate.min(limit),
            None => estimate,
        }
    }
}
