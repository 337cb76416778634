//! Output formatting for fips-detect.
//!
//! Provides terminal and JSON output formatters.
//!
//! The terminal report prints one line per probe with a yes/no answer and,
//! when the probe failed, its error on an indented line below. The JSON
//! report serializes the same fields.

use crate::cli::args::OutputFormat;
use crate::engine::result::SystemReport;
use crate::{FipsDetectError, ProbeKind};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a system report into a string
    fn format(&self, report: &SystemReport) -> Result<String, FipsDetectError>;
}

/// Heading of the terminal report
pub const REPORT_TITLE: &str = "FIPS System Report";

/// Terminal line label for a probe
pub fn probe_label(kind: ProbeKind) -> &'static str {
    match kind {
        ProbeKind::HostMode => "Host running in FIPS mode",
        ProbeKind::CryptoLibrary => "FIPS-capable crypto library",
        ProbeKind::TargetBinary => "FIPS-capable target binary",
    }
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool) -> Self {
        TerminalFormatter { color }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn answer(&self, value: bool) -> String {
        if value {
            self.colorize("Yes!", "32")
        } else {
            self.colorize("No", "31")
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &SystemReport) -> Result<String, FipsDetectError> {
        let mut lines = vec![REPORT_TITLE.to_string()];

        for (kind, result) in report.probes() {
            lines.push(format!("{} ...{}", probe_label(kind), self.answer(result.value)));
            if let Some(ref err) = result.error {
                lines.push(format!("   {}", err));
            }
        }

        Ok(lines.join("\n"))
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &SystemReport) -> Result<String, FipsDetectError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };

        rendered.map_err(|e| FipsDetectError::Output {
            message: e.to_string(),
        })
    }
}

/// Pick the formatter for the requested output format
pub fn get_formatter(format: OutputFormat, color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(false)),
    }
}
