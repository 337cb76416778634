//! FIPS readiness probes.
//!
//! This module contains the three independent probes:
//! - Host: kernel FIPS enforcement flag
//! - Crypto library: OpenSSL libraries exporting the FIPS capability symbol
//! - Binary: ELF symbol table of a target executable
//!
//! # Graceful Degradation
//!
//! All probes follow these rules:
//! - Any failure is attached to the returned ProbeResult, never propagated
//! - A failed probe reports `value = false` alongside its error
//! - No input for an optional probe (no target binary) is not an error
//!
//! Probes never panic and never modify the system.

pub mod binary;
pub mod crypto_lib;
pub mod host;

pub use binary::check_binary_fips_capable;
pub use crypto_lib::{check_crypto_lib_fips, find_crypto_libs};
pub use host::check_host_fips_mode;
