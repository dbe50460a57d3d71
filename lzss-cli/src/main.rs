//! lzss - LZSS file compressor
//!
//! Compresses a source file into a target file, or expands one with `-e`.

mod utils;

use clap::Parser;
use lzss_codec::{LzssConfig, LzssDecoder, compress_with_stats};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;
use utils::{Mode, Report, read_source, write_target};

#[derive(Parser)]
#[command(name = "lzss")]
#[command(author, version, about = "LZSS file compressor (4KB window)")]
#[command(long_about = "
Compresses SOURCE into TARGET using LZSS with a 4KB window and 3..18 byte
matches. With -e, expands a compressed SOURCE back into TARGET.

Examples:
  lzss notes.txt notes.lzss
  lzss -e notes.lzss notes.txt
  lzss -v --json data.bin data.lzss
")]
struct Cli {
    /// Expand SOURCE instead of compressing it
    #[arg(short = 'e', long = "expand")]
    expand: bool,

    /// File to read
    source: PathBuf,

    /// File to write (created or truncated)
    target: PathBuf,

    /// Print a size report after the operation
    #[arg(short, long)]
    verbose: bool,

    /// Print the size report as JSON (machine-readable)
    #[arg(long)]
    json: bool,

    /// Refuse to expand past this many bytes
    #[arg(long, value_name = "BYTES")]
    max_output: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = if cli.expand {
        cmd_expand(&cli.source, &cli.target, cli.max_output)
    } else {
        cmd_compress(&cli.source, &cli.target)
    };

    match result {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else if cli.verbose {
                report.print();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn cmd_compress(source: &Path, target: &Path) -> Result<Report, Box<dyn std::error::Error>> {
    let data = read_source(source)?;
    info!(source = %source.display(), bytes = data.len(), "compressing");

    let (compressed, stats) = compress_with_stats(&data);
    debug!(
        literals = stats.literals,
        matches = stats.matches,
        blocks = stats.blocks,
        "encoded"
    );

    write_target(target, &compressed)?;
    info!(target = %target.display(), bytes = compressed.len(), "wrote compressed output");

    Ok(Report::new(Mode::Compress, source, target, data.len(), compressed.len())
        .with_symbols(stats.literals, stats.matches))
}

fn cmd_expand(
    source: &Path,
    target: &Path,
    max_output: Option<usize>,
) -> Result<Report, Box<dyn std::error::Error>> {
    let data = read_source(source)?;
    info!(source = %source.display(), bytes = data.len(), "expanding");

    let config = match max_output {
        Some(limit) => LzssConfig::with_max_output(limit),
        None => LzssConfig::DEFAULT,
    };
    let expanded = LzssDecoder::new(config).decode(&data)?;

    write_target(target, &expanded)?;
    info!(target = %target.display(), bytes = expanded.len(), "wrote expanded output");

    Ok(Report::new(Mode::Expand, source, target, data.len(), expanded.len()))
}
