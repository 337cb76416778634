//! Output formatting tests.
//!
//! Tests for terminal and JSON output formatters.

use fips_detect::cli::args::OutputFormat;
use fips_detect::cli::output::{get_formatter, JsonFormatter, OutputFormatter, TerminalFormatter};
use fips_detect::engine::result::SystemReport;
use fips_detect::{FipsDetectError, ProbeResult};

fn create_sample_report() -> SystemReport {
    SystemReport::new(
        ProbeResult::failed(FipsDetectError::HostStateUnreadable {
            path: "/proc/sys/crypto/fips_enabled".to_string(),
            message: "No such file or directory (os error 2)".to_string(),
        }),
        ProbeResult::yes(),
        ProbeResult::no(),
    )
}

#[test]
fn test_terminal_formatter_basic() {
    let output = TerminalFormatter::new(false).format(&create_sample_report()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        vec![
            "FIPS System Report",
            "Host running in FIPS mode ...No",
            "   cannot read /proc/sys/crypto/fips_enabled file: No such file or directory (os error 2)",
            "FIPS-capable crypto library ...Yes!",
            "FIPS-capable target binary ...No",
        ]
    );
}

#[test]
fn test_terminal_formatter_one_line_per_probe_without_errors() {
    let report = SystemReport::new(ProbeResult::no(), ProbeResult::no(), ProbeResult::no());
    let output = TerminalFormatter::new(false).format(&report).unwrap();

    assert_eq!(output.lines().count(), 4);
    assert!(!output.contains("   "));
}

#[test]
fn test_terminal_formatter_color() {
    let output = TerminalFormatter::new(true).format(&create_sample_report()).unwrap();
    assert!(output.contains("\x1b[32mYes!\x1b[0m"));
    assert!(output.contains("\x1b[31mNo\x1b[0m"));
}

#[test]
fn test_terminal_formatter_no_color() {
    let output = TerminalFormatter::new(false).format(&create_sample_report()).unwrap();
    assert!(!output.contains("\x1b["));
}

#[test]
fn test_json_formatter_fields() {
    let output = JsonFormatter::new(false).format(&create_sample_report()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["fips_mode"]["value"], false);
    assert_eq!(
        json["fips_mode"]["error"],
        "cannot read /proc/sys/crypto/fips_enabled file: No such file or directory (os error 2)"
    );
    assert_eq!(json["crypto_libs_fips"]["value"], true);
    assert!(json["crypto_libs_fips"]["error"].is_null());
    assert_eq!(json["fips_compatible_binary"]["value"], false);
    assert_eq!(json.as_object().unwrap().len(), 3);
}

#[test]
fn test_json_formatter_compact_is_single_line() {
    let output = JsonFormatter::new(false).format(&create_sample_report()).unwrap();
    assert_eq!(output.lines().count(), 1);

    let pretty = JsonFormatter::new(true).format(&create_sample_report()).unwrap();
    assert!(pretty.lines().count() > 1);
}

#[test]
fn test_get_formatter() {
    let report = create_sample_report();

    let text = get_formatter(OutputFormat::Text, false).format(&report).unwrap();
    assert!(text.starts_with("FIPS System Report"));

    let json = get_formatter(OutputFormat::Json, false).format(&report).unwrap();
    assert!(json.starts_with('{'));
}
