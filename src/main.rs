//! fips-detect CLI entry point
//!
//! Reports whether the host, its crypto libraries, and an optional binary
//! are ready to run in FIPS mode.

use clap::Parser;
use fips_detect::cli::args::Args;
use fips_detect::cli::output::get_formatter;
use fips_detect::version::get_build_info;
use fips_detect::{run_checks, FipsDetectConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbose);

    if args.version {
        println!("{}", get_build_info());
        return ExitCode::SUCCESS;
    }

    let config = FipsDetectConfig::from_args(&args);
    let report = run_checks(config);

    let formatter = get_formatter(args.output_format(), args.color_enabled());
    match formatter.format(&report) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so JSON on stdout stays parseable
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}
