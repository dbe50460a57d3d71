//! File helpers and size reporting for the CLI.

use serde::Serialize;
use std::io;
use std::path::Path;

/// Direction of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Raw bytes in, LZSS stream out.
    Compress,
    /// LZSS stream in, raw bytes out.
    Expand,
}

/// Outcome of one run, printed with `--verbose` or `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub mode: Mode,
    pub source: String,
    pub target: String,
    pub input_size: usize,
    pub output_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literals: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<usize>,
}

impl Report {
    pub fn new(
        mode: Mode,
        source: &Path,
        target: &Path,
        input_size: usize,
        output_size: usize,
    ) -> Self {
        Self {
            mode,
            source: source.display().to_string(),
            target: target.display().to_string(),
            input_size,
            output_size,
            literals: None,
            matches: None,
        }
    }

    /// Attach the encoder's symbol counts.
    pub fn with_symbols(mut self, literals: usize, matches: usize) -> Self {
        self.literals = Some(literals);
        self.matches = Some(matches);
        self
    }

    /// Size of the compressed side relative to the uncompressed side, in percent.
    pub fn ratio(&self) -> f64 {
        let (raw, packed) = match self.mode {
            Mode::Compress => (self.input_size, self.output_size),
            Mode::Expand => (self.output_size, self.input_size),
        };
        if raw == 0 {
            100.0
        } else {
            packed as f64 / raw as f64 * 100.0
        }
    }

    pub fn print(&self) {
        println!(
            "{} -> {}: {} -> {} bytes ({:.1}%)",
            self.source,
            self.target,
            self.input_size,
            self.output_size,
            self.ratio()
        );
        if let (Some(literals), Some(matches)) = (self.literals, self.matches) {
            println!("  {} literals, {} back-references", literals, matches);
        }
    }
}

/// Read the whole source file, naming it in the error.
pub fn read_source(path: &Path) -> io::Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("cannot read \"{}\": {}", path.display(), e),
        )
    })
}

/// Write the whole target file, naming it in the error.
pub fn write_target(path: &Path, data: &[u8]) -> io::Result<()> {
    std::fs::write(path, data).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("cannot write \"{}\": {}", path.display(), e),
        )
    })
}
