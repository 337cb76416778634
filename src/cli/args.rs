//! Command line arguments for fips-detect.

use clap::{Parser, ValueEnum};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Parsed command line arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fips-detect",
    about = "Check whether this host, its crypto libraries, and a binary are FIPS-ready",
    disable_version_flag = true
)]
pub struct Args {
    /// ELF binary to inspect for FIPS-capable crypto
    #[arg(value_name = "BINARY")]
    pub binary: Option<String>,

    /// Output in JSON format (same as --format json)
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "FIPS_DETECT_FORMAT")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log probe details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print version information
    #[arg(short = 'V', long = "version")]
    pub version: bool,
}

impl Args {
    /// Effective output format; `--json` wins over `--format`
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    /// Whether the text report may use ANSI colors
    pub fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }
}
