//! fips-detect library
//!
//! Point-in-time FIPS readiness diagnostics for Linux hosts.
//!
//! Three independent probes answer one yes/no question each:
//! - Is the kernel enforcing FIPS mode?
//! - Does an OpenSSL-compatible crypto library on this system expose `FIPS_mode`?
//! - Was a given ELF binary linked with FIPS-capable crypto code?
//!
//! The results are collected into a [`SystemReport`](engine::result::SystemReport)
//! that renderers in [`cli::output`] turn into text or JSON.
//!
//! # Example
//!
//! ```no_run
//! use fips_detect::fips_system_check;
//!
//! let report = fips_system_check("/usr/local/bin/my-service");
//! println!("Host in FIPS mode: {}", report.fips_mode.value);
//! if let Some(err) = &report.crypto_libs_fips.error {
//!     eprintln!("crypto library probe: {}", err);
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod engine;
pub mod platform;
pub mod version;

use cli::args::Args;
use engine::orchestrator::CheckOrchestrator;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// Re-exports for public API
pub use engine::orchestrator::CheckOrchestrator as Orchestrator;
pub use engine::result::SystemReport;

/// Kernel flag that reports whether FIPS enforcement is active.
pub const PROC_SYS_FIPS_ENABLED_PATH: &str = "/proc/sys/crypto/fips_enabled";

/// Directories scanned for OpenSSL crypto libraries, in scan order.
pub const DEFAULT_LIBRARY_DIRS: [&str; 4] = ["/lib64", "/usr/lib64", "/lib", "/usr/lib"];

/// Symbol a FIPS-capable OpenSSL build exports.
pub const FIPS_CAPABILITY_SYMBOL: &str = "FIPS_mode";

/// Outcome of one yes/no system probe.
///
/// When `error` is set the probe could not reach a conclusive answer and
/// `value` holds the safe default (`false`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub value: bool,
    pub error: Option<FipsDetectError>,
}

impl ProbeResult {
    /// The condition holds.
    pub fn yes() -> Self {
        ProbeResult {
            value: true,
            error: None,
        }
    }

    /// The condition conclusively does not hold.
    pub fn no() -> Self {
        ProbeResult {
            value: false,
            error: None,
        }
    }

    /// The probe failed; the value defaults to `false`.
    pub fn failed(error: FipsDetectError) -> Self {
        ProbeResult {
            value: false,
            error: Some(error),
        }
    }

    /// Whether the probe carries an error.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(err) => write!(f, "{} ({})", self.value, err),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Identifies one of the three probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    /// Kernel FIPS enforcement
    HostMode,
    /// OpenSSL library exposing FIPS capability
    CryptoLibrary,
    /// Target binary linked with FIPS-capable crypto
    TargetBinary,
}

impl ProbeKind {
    /// All probes in report order.
    pub const ALL: [ProbeKind; 3] = [
        ProbeKind::HostMode,
        ProbeKind::CryptoLibrary,
        ProbeKind::TargetBinary,
    ];
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::HostMode => write!(f, "host-mode"),
            ProbeKind::CryptoLibrary => write!(f, "crypto-library"),
            ProbeKind::TargetBinary => write!(f, "target-binary"),
        }
    }
}

/// Error types for fips-detect operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FipsDetectError {
    /// Kernel status file missing or inaccessible
    #[error("cannot read {path} file: {message}")]
    HostStateUnreadable { path: String, message: String },

    /// Kernel status file readable but empty
    #[error("cannot read {path} file: file is empty")]
    HostStateEmpty { path: String },

    /// No candidate library in any scanned directory
    #[error("no crypto libraries have been found: the OpenSSL library is not installed")]
    NoCryptoLibraries,

    /// The dynamic loader could not open a candidate library
    #[error("cannot dlopen {library} crypto library: {message}")]
    LibraryLoad { library: String, message: String },

    /// A loaded library does not export the capability symbol
    #[error("{library} is not FIPS-capable: {message}")]
    SymbolNotFound {
        library: String,
        symbol: String,
        message: String,
    },

    /// Target binary missing, unreadable, or not ELF
    #[error("{path} is not an ELF binary")]
    InvalidBinary { path: String, reason: String },

    /// Filesystem access failed
    #[error("I/O error in {context}: {message}")]
    IoError { context: String, message: String },

    /// A probe panicked instead of returning a result
    #[error("probe {probe} panicked during execution")]
    ProbePanicked { probe: String },

    /// Report could not be rendered
    #[error("failed to render report: {message}")]
    Output { message: String },
}

impl Serialize for FipsDetectError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Configuration for a FIPS system check.
#[derive(Debug, Clone)]
pub struct FipsDetectConfig {
    /// Binary to inspect (empty = none)
    pub binary: String,
    /// Kernel FIPS flag file
    pub fips_enabled_path: PathBuf,
    /// Directories scanned for crypto libraries, in order
    pub library_dirs: Vec<PathBuf>,
    /// Symbol resolved in each candidate crypto library
    pub capability_symbol: String,
}

impl Default for FipsDetectConfig {
    fn default() -> Self {
        FipsDetectConfig {
            binary: String::new(),
            fips_enabled_path: PathBuf::from(PROC_SYS_FIPS_ENABLED_PATH),
            library_dirs: DEFAULT_LIBRARY_DIRS.iter().map(PathBuf::from).collect(),
            capability_symbol: FIPS_CAPABILITY_SYMBOL.to_string(),
        }
    }
}

impl FipsDetectConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        FipsDetectConfig {
            binary: args.binary.clone().unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Set the binary to inspect
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }
}

/// Run all probes with the production loader and ELF reader.
pub fn run_checks(config: FipsDetectConfig) -> SystemReport {
    CheckOrchestrator::with_system_platform(config).run()
}

/// Check the host, its crypto libraries, and `binary` (empty = skip).
///
/// This is the main entry point. It never fails: every probe error is
/// attached to that probe's [`ProbeResult`].
pub fn fips_system_check(binary: &str) -> SystemReport {
    run_checks(FipsDetectConfig::default().with_binary(binary))
}
