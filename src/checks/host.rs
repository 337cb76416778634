//! Host FIPS mode probe.
//!
//! The kernel exposes its FIPS enforcement state as a single character in
//! `/proc/sys/crypto/fips_enabled`: `1` when enforcing, `0` otherwise.

use crate::platform::linux;
use crate::{FipsDetectError, ProbeResult};
use std::path::Path;
use tracing::debug;

/// Report whether the kernel flag at `path` says FIPS mode is enabled.
pub fn check_host_fips_mode(path: &Path) -> ProbeResult {
    let content = match linux::read_kernel_flag(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "kernel FIPS flag unreadable");
            return ProbeResult::failed(e);
        }
    };

    match content.first() {
        Some(b'1') => ProbeResult::yes(),
        Some(_) => ProbeResult::no(),
        None => ProbeResult::failed(FipsDetectError::HostStateEmpty {
            path: path.display().to_string(),
        }),
    }
}
