//! Probe execution orchestrator.
//!
//! Runs the host, crypto library, and binary probes and assembles the
//! [`SystemReport`].
//!
//! # Graceful Degradation
//!
//! This module handles errors gracefully:
//! - Probe errors: Attached to that probe's result, other probes still run
//! - Probe panics: Caught via std::panic::catch_unwind, converted to a failed result
//! - Missing target binary: Reported as `false` without an error
//!
//! The orchestrator always returns a report with all three results.
//! No function in this module will panic.

use crate::checks;
use crate::engine::result::SystemReport;
use crate::platform::dynlib::{LibloadingLoader, SharedLibraryLoader};
use crate::platform::elf::{GoblinSymbolReader, SymbolTableReader};
use crate::{FipsDetectConfig, FipsDetectError, ProbeKind, ProbeResult};
use std::time::Instant;
use tracing::{debug, info};

/// Probe orchestrator
pub struct CheckOrchestrator {
    config: FipsDetectConfig,
    loader: Box<dyn SharedLibraryLoader>,
    reader: Box<dyn SymbolTableReader>,
}

impl CheckOrchestrator {
    /// Create an orchestrator with explicit platform implementations
    pub fn new(
        config: FipsDetectConfig,
        loader: Box<dyn SharedLibraryLoader>,
        reader: Box<dyn SymbolTableReader>,
    ) -> Self {
        CheckOrchestrator {
            config,
            loader,
            reader,
        }
    }

    /// Create an orchestrator backed by the system loader and goblin
    pub fn with_system_platform(config: FipsDetectConfig) -> Self {
        Self::new(
            config,
            Box::new(LibloadingLoader::new()),
            Box::new(GoblinSymbolReader::new()),
        )
    }

    pub fn config(&self) -> &FipsDetectConfig {
        &self.config
    }

    /// Run all probes and build the report
    pub fn run(&self) -> SystemReport {
        let start = Instant::now();

        let report = SystemReport::new(
            self.execute_probe(ProbeKind::HostMode),
            self.execute_probe(ProbeKind::CryptoLibrary),
            self.execute_probe(ProbeKind::TargetBinary),
        );

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "FIPS system check complete"
        );
        report
    }

    /// Run a single probe
    pub fn run_probe(&self, kind: ProbeKind) -> ProbeResult {
        match kind {
            ProbeKind::HostMode => checks::check_host_fips_mode(&self.config.fips_enabled_path),
            ProbeKind::CryptoLibrary => checks::check_crypto_lib_fips(
                &self.config.library_dirs,
                &self.config.capability_symbol,
                self.loader.as_ref(),
            ),
            ProbeKind::TargetBinary => {
                checks::check_binary_fips_capable(&self.config.binary, self.reader.as_ref())
            }
        }
    }

    /// Execute a single probe, converting a panic into a failed result
    fn execute_probe(&self, kind: ProbeKind) -> ProbeResult {
        let start = Instant::now();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| self.run_probe(kind)))
            .unwrap_or_else(|_| {
                ProbeResult::failed(FipsDetectError::ProbePanicked {
                    probe: kind.to_string(),
                })
            });

        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result.error {
            Some(e) => info!(probe = %kind, error = %e, elapsed_ms, "probe reported an error"),
            None => debug!(probe = %kind, value = result.value, elapsed_ms, "probe finished"),
        }

        result
    }
}
