//! Crypto library FIPS capability probe.
//!
//! Scans the standard library directories for OpenSSL `libcrypto` shared
//! objects, then loads each candidate in turn and looks for the FIPS
//! capability symbol. The first library that exports it answers the
//! question; later candidates are never loaded.

use crate::platform::dynlib::SharedLibraryLoader;
use crate::platform::linux;
use crate::{FipsDetectError, ProbeResult};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

/// `libcrypto` followed by anything, ending in `.so` or `.so.<suffix>`.
static CRYPTO_LIB_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^libcrypto.*\.so($|\..*)").expect("valid regex"));

/// True if `name` looks like an OpenSSL crypto shared object.
pub fn is_crypto_lib_name(name: &str) -> bool {
    CRYPTO_LIB_NAME.is_match(name)
}

/// Candidate crypto libraries in one directory.
///
/// Returns nothing for a directory that is missing, unreadable, or is
/// itself a symlink (the same libraries are reachable through its target).
pub fn find_crypto_libs_in_dir(dir: &Path) -> Vec<String> {
    if !linux::is_real_directory(dir) {
        debug!(dir = %dir.display(), "skipping missing or symlinked library dir");
        return Vec::new();
    }

    match linux::list_regular_files(dir) {
        Ok(names) => names.into_iter().filter(|n| is_crypto_lib_name(n)).collect(),
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "cannot list library dir");
            Vec::new()
        }
    }
}

/// Candidate crypto libraries across `dirs`, in directory order.
pub fn find_crypto_libs(dirs: &[PathBuf]) -> Result<Vec<String>, FipsDetectError> {
    let libs: Vec<String> = dirs
        .iter()
        .flat_map(|dir| find_crypto_libs_in_dir(dir))
        .collect();

    if libs.is_empty() {
        return Err(FipsDetectError::NoCryptoLibraries);
    }
    Ok(libs)
}

/// Try each candidate until one exports `symbol`.
///
/// On total failure only the last candidate's error is reported.
pub fn check_candidates(
    candidates: &[String],
    symbol: &str,
    loader: &dyn SharedLibraryLoader,
) -> ProbeResult {
    let mut last_err = FipsDetectError::NoCryptoLibraries;

    for name in candidates {
        let library = match loader.open(name) {
            Ok(lib) => lib,
            Err(e) => {
                debug!(library = %name, error = %e, "cannot load crypto library");
                last_err = e;
                continue;
            }
        };

        match library.resolve(symbol) {
            Ok(()) => {
                info!(library = %name, symbol, "found FIPS-capable crypto library");
                return ProbeResult::yes();
            }
            Err(e) => {
                debug!(library = %name, error = %e, "crypto library lacks capability symbol");
                last_err = e;
            }
        }
    }

    ProbeResult::failed(last_err)
}

/// Report whether any OpenSSL crypto library under `dirs` exports `symbol`.
pub fn check_crypto_lib_fips(
    dirs: &[PathBuf],
    symbol: &str,
    loader: &dyn SharedLibraryLoader,
) -> ProbeResult {
    let candidates = match find_crypto_libs(dirs) {
        Ok(libs) => libs,
        Err(e) => return ProbeResult::failed(e),
    };

    debug!(count = candidates.len(), "crypto library candidates found");
    check_candidates(&candidates, symbol, loader)
}
