//! ELF symbol table access.
//!
//! [`SymbolTableReader`] turns an executable into a flat list of
//! `(name, section index)` pairs; the probe logic never sees the ELF
//! structures themselves.

use crate::FipsDetectError;
use goblin::elf::Elf;
use std::fs;
use std::path::Path;

/// Section index of a symbol that is referenced but not defined.
pub const SHN_UNDEF: usize = 0;

/// First section index of the reserved range (`SHN_ABS`, `SHN_COMMON`, ...).
pub const SHN_LORESERVE: usize = 0xff00;

/// One symbol from a binary's symbol tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub section_index: usize,
}

impl SymbolEntry {
    pub fn new(name: impl Into<String>, section_index: usize) -> Self {
        SymbolEntry {
            name: name.into(),
            section_index,
        }
    }

    /// True if the symbol is bound to a real section of the binary.
    pub fn is_defined(&self) -> bool {
        self.section_index > SHN_UNDEF && self.section_index < SHN_LORESERVE
    }
}

/// Reads symbol tables out of executables.
pub trait SymbolTableReader {
    /// Enumerate every symbol of the executable at `path`.
    fn read_symbols(&self, path: &Path) -> Result<Vec<SymbolEntry>, FipsDetectError>;
}

/// Reader backed by `goblin`.
///
/// Returns `.symtab` entries followed by `.dynsym` entries. A stripped
/// binary yields only its dynamic symbols.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoblinSymbolReader;

impl GoblinSymbolReader {
    pub fn new() -> Self {
        GoblinSymbolReader
    }
}

impl SymbolTableReader for GoblinSymbolReader {
    fn read_symbols(&self, path: &Path) -> Result<Vec<SymbolEntry>, FipsDetectError> {
        let invalid = |reason: String| FipsDetectError::InvalidBinary {
            path: path.display().to_string(),
            reason,
        };

        let binary = fs::read(path).map_err(|e| invalid(format!("read executable: {}", e)))?;
        let elf = Elf::parse(&binary).map_err(|e| invalid(format!("parse elf: {}", e)))?;

        let mut symbols = Vec::with_capacity(elf.syms.len() + elf.dynsyms.len());

        for sym in elf.syms.iter() {
            if let Some(name) = elf.strtab.get_at(sym.st_name) {
                symbols.push(SymbolEntry::new(name, sym.st_shndx));
            }
        }

        for sym in elf.dynsyms.iter() {
            if let Some(name) = elf.dynstrtab.get_at(sym.st_name) {
                symbols.push(SymbolEntry::new(name, sym.st_shndx));
            }
        }

        Ok(symbols)
    }
}
