//! Linux system interface.
//!
//! Provides read-only access to /proc and library directories.
//!
//! # Graceful Degradation
//!
//! This module handles errors gracefully:
//! - File not found: Returns FipsDetectError::HostStateUnreadable or IoError
//! - Permission denied: Same, with the OS message attached
//! - Symlinked or missing directories: Reported as "not a real directory"
//!
//! No function in this module will panic or write to the filesystem.

use crate::FipsDetectError;
use std::fs;
use std::path::Path;

/// Read the raw contents of a kernel status file such as
/// `/proc/sys/crypto/fips_enabled`.
pub fn read_kernel_flag(path: &Path) -> Result<Vec<u8>, FipsDetectError> {
    fs::read(path).map_err(|e| FipsDetectError::HostStateUnreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// True if `path` exists, is a directory, and is not itself a symlink.
pub fn is_real_directory(path: &Path) -> bool {
    // symlink_metadata does not follow the final link
    match fs::symlink_metadata(path) {
        Ok(meta) => meta.file_type().is_dir(),
        Err(_) => false,
    }
}

/// List the names of regular files directly inside `dir`, sorted.
///
/// Symlinks, directories and special files are left out. Entries that
/// cannot be inspected are skipped.
pub fn list_regular_files(dir: &Path) -> Result<Vec<String>, FipsDetectError> {
    let entries = fs::read_dir(dir).map_err(|e| FipsDetectError::IoError {
        context: format!("list_regular_files({})", dir.display()),
        message: e.to_string(),
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let is_regular = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_regular {
            continue;
        }

        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}
