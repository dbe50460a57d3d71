//! Compression statistics.

/// Counters collected while encoding one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressionStats {
    /// Uncompressed size in bytes.
    pub input_size: usize,
    /// Compressed size in bytes.
    pub output_size: usize,
    /// Literal symbols emitted.
    pub literals: usize,
    /// Back-reference symbols emitted.
    pub matches: usize,
    /// Input bytes covered by back-references.
    pub matched_bytes: usize,
    /// Blocks (control bytes) emitted.
    pub blocks: usize,
}

impl CompressionStats {
    /// Compressed size as a fraction of the input size.
    ///
    /// Empty input reports 1.0.
    pub fn ratio(&self) -> f64 {
        if self.input_size == 0 {
            1.0
        } else {
            self.output_size as f64 / self.input_size as f64
        }
    }

    /// Percentage of input saved, negative when the output grew.
    pub fn space_savings(&self) -> f64 {
        (1.0 - self.ratio()) * 100.0
    }

    /// Total symbols emitted.
    pub fn symbols(&self) -> usize {
        self.literals + self.matches
    }
}
