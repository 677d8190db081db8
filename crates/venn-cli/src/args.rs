//! Command-line argument definitions for the Venn CLI.
//!
//! Arguments select the interaction script to replay, the configuration
//! file, where the SVG snapshot and the optional report are written, and the
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the Venn diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Interaction script replayed against the diagram before export
    #[arg(help = "Path to an interaction script")]
    pub script: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to the text report; no report is written when omitted
    #[arg(short, long)]
    pub report: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Sampling grid step for region counting, in pixels
    #[arg(long)]
    pub step: Option<f32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
