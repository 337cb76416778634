//! CLI module for argument parsing and output formatting.
//!
//! Arguments are parsed with clap; reports render as text or JSON.

pub mod args;
pub mod output;
