//! LZSS encoder (compression).

use crate::block::BlockWriter;
use crate::config::LzssConfig;
use crate::match_finder::MatchFinder;
use crate::stats::CompressionStats;
use crate::token::LzssToken;

/// LZSS encoder for compression.
///
/// The encoder keeps no state between calls other than the statistics of
/// the most recent [`encode`](Self::encode).
#[derive(Debug, Default)]
pub struct LzssEncoder {
    /// Statistics from the last encode.
    stats: CompressionStats,
}

impl LzssEncoder {
    /// Create a new LZSS encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Greedy parse: at each position take the longest match if it is at
    /// least `MIN_MATCH` long, otherwise a literal.
    fn parse(input: &[u8], mut emit: impl FnMut(LzssToken)) {
        let finder = MatchFinder::new(input);

        let mut j = 0;
        while j < input.len() {
            let m = finder.longest_match(j);
            if m.is_encodable() {
                emit(LzssToken::Match {
                    length: m.length as u16,
                    distance: m.distance as u16,
                });
                j += m.length;
            } else {
                emit(LzssToken::Literal(input[j]));
                j += 1;
            }
        }
    }

    /// Produce the token sequence `encode` would pack, without packing it.
    pub fn tokenize(&self, input: &[u8]) -> Vec<LzssToken> {
        let mut tokens = Vec::new();
        Self::parse(input, |token| tokens.push(token));
        tokens
    }

    /// Encode data with LZSS compression.
    ///
    /// # Algorithm
    ///
    /// 1. Link every 2-byte prefix to its previous occurrence
    /// 2. Walk the input left to right, searching the chain at each position
    /// 3. Emit a back-reference for matches of 3..=18 bytes within 4096
    ///    bytes, otherwise a literal
    /// 4. Pack symbols eight at a time behind a control byte
    ///
    /// The output has no header; an empty input encodes to an empty stream.
    pub fn encode(&mut self, input: &[u8]) -> Vec<u8> {
        let mut writer = BlockWriter::with_capacity(LzssConfig::max_compressed_size(input.len()));
        let mut stats = CompressionStats {
            input_size: input.len(),
            ..Default::default()
        };

        Self::parse(input, |token| match token {
            LzssToken::Literal(byte) => {
                stats.literals += 1;
                writer.push_literal(byte);
            }
            LzssToken::Match { length, distance } => {
                stats.matches += 1;
                stats.matched_bytes += length as usize;
                writer.push_reference(length as usize, distance as usize);
            }
        });

        let output = writer.finish();
        stats.output_size = output.len();
        stats.blocks = stats.symbols().div_ceil(LzssConfig::BLOCK_SYMBOLS);

        tracing::debug!(
            input = stats.input_size,
            output = stats.output_size,
            literals = stats.literals,
            matches = stats.matches,
            "lzss encode"
        );

        self.stats = stats;
        output
    }

    /// Statistics from the most recent call to [`encode`](Self::encode).
    pub fn stats(&self) -> &CompressionStats {
        &self.stats
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.stats = CompressionStats::default();
    }
}
