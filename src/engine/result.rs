//! Aggregate report of the three probes.

use crate::{FipsDetectError, ProbeKind, ProbeResult};
use serde::Serialize;

/// FIPS readiness of the host, its crypto libraries, and a target binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemReport {
    /// Kernel is enforcing FIPS mode
    pub fips_mode: ProbeResult,
    /// An OpenSSL crypto library exposes FIPS capability
    pub crypto_libs_fips: ProbeResult,
    /// The target binary defines a FIPS mode symbol
    pub fips_compatible_binary: ProbeResult,
}

impl SystemReport {
    pub fn new(
        fips_mode: ProbeResult,
        crypto_libs_fips: ProbeResult,
        fips_compatible_binary: ProbeResult,
    ) -> Self {
        SystemReport {
            fips_mode,
            crypto_libs_fips,
            fips_compatible_binary,
        }
    }

    /// Result of one probe
    pub fn get(&self, kind: ProbeKind) -> &ProbeResult {
        match kind {
            ProbeKind::HostMode => &self.fips_mode,
            ProbeKind::CryptoLibrary => &self.crypto_libs_fips,
            ProbeKind::TargetBinary => &self.fips_compatible_binary,
        }
    }

    /// All three results in report order
    pub fn probes(&self) -> [(ProbeKind, &ProbeResult); 3] {
        ProbeKind::ALL.map(|kind| (kind, self.get(kind)))
    }

    /// Errors attached to any probe, in report order
    pub fn errors(&self) -> impl Iterator<Item = (ProbeKind, &FipsDetectError)> {
        self.probes()
            .into_iter()
            .filter_map(|(kind, result)| result.error.as_ref().map(|e| (kind, e)))
    }
}
