//! CLI interface for itch-vwap
//!
//! One command: process a feed file into a VWAP report. The report file
//! lands in the working directory, named from the input stem.

mod process;

pub use process::ProcessArgs;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "itch-vwap")]
#[command(about = "Per-symbol hourly VWAP from an ITCH-style binary feed file")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub process: ProcessArgs,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}
