//! Target binary FIPS capability probe.
//!
//! A binary is considered FIPS-capable when its symbol tables contain a
//! *defined* symbol whose name includes `FIPS_mode`. Undefined symbols are
//! only references to code the binary does not carry and never count.

use crate::platform::elf::SymbolTableReader;
use crate::ProbeResult;
use std::path::Path;
use tracing::debug;

/// Substring a FIPS-capable binary's symbol names contain.
pub const FIPS_SYMBOL_PATTERN: &str = "FIPS_mode";

/// Report whether the ELF binary at `path` defines a `FIPS_mode` symbol.
///
/// An empty `path` means no binary was given: the result is `false`
/// without an error and without touching the filesystem.
pub fn check_binary_fips_capable(path: &str, reader: &dyn SymbolTableReader) -> ProbeResult {
    if path.is_empty() {
        return ProbeResult::no();
    }

    let symbols = match reader.read_symbols(Path::new(path)) {
        Ok(symbols) => symbols,
        Err(e) => {
            debug!(path, error = ?e, "cannot read symbol table");
            return ProbeResult::failed(e);
        }
    };

    let found = symbols
        .iter()
        .find(|s| s.name.contains(FIPS_SYMBOL_PATTERN) && s.is_defined());

    match found {
        Some(sym) => {
            debug!(path, symbol = %sym.name, section = sym.section_index, "FIPS symbol defined");
            ProbeResult::yes()
        }
        None => ProbeResult::no(),
    }
}
