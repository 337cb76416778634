//! Mock platform implementations for testing.
//!
//! Provides configurable mock implementations that simulate:
//! - A dynamic loader with per-library outcomes
//! - ELF symbol tables for named binaries
//! - Host fixtures (kernel flag file, library directories) on disk

use fips_detect::platform::dynlib::{LoadedLibrary, SharedLibraryLoader};
use fips_detect::platform::elf::{SymbolEntry, SymbolTableReader};
use fips_detect::{FipsDetectConfig, FipsDetectError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

/// How a mocked library behaves when loaded
#[derive(Debug, Clone, PartialEq)]
pub enum MockLibrary {
    /// dlopen fails with the given message
    FailsToLoad(String),
    /// Loads, but the capability symbol is absent
    MissingSymbol,
    /// Loads and exports the capability symbol
    ExportsSymbol,
}

/// Shared bookkeeping of a mock loader
#[derive(Debug, Default)]
pub struct LoaderLog {
    /// Names passed to `open`, in call order
    pub opened: Vec<String>,
    /// Handles currently alive
    pub live_handles: usize,
}

/// Loader whose outcomes are configured per library name.
///
/// Unknown names fail to load.
pub struct MockLoader {
    libraries: HashMap<String, MockLibrary>,
    log: Rc<RefCell<LoaderLog>>,
}

impl MockLoader {
    pub fn new() -> Self {
        MockLoader {
            libraries: HashMap::new(),
            log: Rc::new(RefCell::new(LoaderLog::default())),
        }
    }

    pub fn with_library(mut self, name: &str, behavior: MockLibrary) -> Self {
        self.libraries.insert(name.to_string(), behavior);
        self
    }

    /// Handle to the call log that stays valid after the loader is boxed
    pub fn log(&self) -> Rc<RefCell<LoaderLog>> {
        Rc::clone(&self.log)
    }
}

struct MockLoadedLibrary {
    name: String,
    exports: bool,
    log: Rc<RefCell<LoaderLog>>,
}

impl LoadedLibrary for MockLoadedLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, symbol: &str) -> Result<(), FipsDetectError> {
        if self.exports {
            return Ok(());
        }
        Err(FipsDetectError::SymbolNotFound {
            library: self.name.clone(),
            symbol: symbol.to_string(),
            message: format!("{}: undefined symbol: {}", self.name, symbol),
        })
    }
}

impl Drop for MockLoadedLibrary {
    fn drop(&mut self) {
        self.log.borrow_mut().live_handles -= 1;
    }
}

impl SharedLibraryLoader for MockLoader {
    fn open(&self, name: &str) -> Result<Box<dyn LoadedLibrary>, FipsDetectError> {
        self.log.borrow_mut().opened.push(name.to_string());

        let behavior = self
            .libraries
            .get(name)
            .cloned()
            .unwrap_or_else(|| MockLibrary::FailsToLoad(format!("{}: cannot open shared object file", name)));

        match behavior {
            MockLibrary::FailsToLoad(message) => Err(FipsDetectError::LibraryLoad {
                library: name.to_string(),
                message,
            }),
            MockLibrary::MissingSymbol | MockLibrary::ExportsSymbol => {
                self.log.borrow_mut().live_handles += 1;
                Ok(Box::new(MockLoadedLibrary {
                    name: name.to_string(),
                    exports: behavior == MockLibrary::ExportsSymbol,
                    log: Rc::clone(&self.log),
                }))
            }
        }
    }
}

/// Symbol reader serving canned symbol tables per path.
///
/// Paths without a table are treated as non-ELF files.
pub struct MockSymbolReader {
    binaries: HashMap<PathBuf, Vec<SymbolEntry>>,
    reads: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockSymbolReader {
    pub fn new() -> Self {
        MockSymbolReader {
            binaries: HashMap::new(),
            reads: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_binary(mut self, path: &str, symbols: Vec<SymbolEntry>) -> Self {
        self.binaries.insert(PathBuf::from(path), symbols);
        self
    }

    /// Paths passed to `read_symbols`, in call order
    pub fn reads(&self) -> Rc<RefCell<Vec<PathBuf>>> {
        Rc::clone(&self.reads)
    }
}

impl SymbolTableReader for MockSymbolReader {
    fn read_symbols(&self, path: &Path) -> Result<Vec<SymbolEntry>, FipsDetectError> {
        self.reads.borrow_mut().push(path.to_path_buf());
        self.binaries
            .get(path)
            .cloned()
            .ok_or_else(|| FipsDetectError::InvalidBinary {
                path: path.display().to_string(),
                reason: "bad magic number".to_string(),
            })
    }
}

/// On-disk fixture standing in for `/proc` and the library directories
pub struct MockHost {
    root: TempDir,
}

impl MockHost {
    pub fn new() -> Self {
        MockHost {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Host whose kernel flag file holds `contents`
    pub fn with_fips_flag(contents: &[u8]) -> Self {
        let host = Self::new();
        fs::write(host.fips_enabled_path(), contents).expect("write fips flag");
        host
    }

    pub fn fips_enabled_path(&self) -> PathBuf {
        self.root.path().join("fips_enabled")
    }

    /// Library directories in scan order
    pub fn library_dirs(&self) -> Vec<PathBuf> {
        ["lib64", "usr-lib64", "lib", "usr-lib"]
            .iter()
            .map(|d| self.root.path().join(d))
            .collect()
    }

    /// Create `name` as a regular file inside library dir `index`
    pub fn add_library(&self, index: usize, name: &str) {
        let dir = &self.library_dirs()[index];
        fs::create_dir_all(dir).expect("create library dir");
        fs::write(dir.join(name), b"\x7fELF").expect("write library");
    }

    /// Make library dir `index` a symlink to library dir `target`
    pub fn link_library_dir(&self, index: usize, target: usize) {
        let dirs = self.library_dirs();
        fs::create_dir_all(&dirs[target]).expect("create library dir");
        std::os::unix::fs::symlink(&dirs[target], &dirs[index]).expect("symlink library dir");
    }

    /// Configuration pointing every probe at this fixture
    pub fn config(&self, binary: &str) -> FipsDetectConfig {
        FipsDetectConfig {
            binary: binary.to_string(),
            fips_enabled_path: self.fips_enabled_path(),
            library_dirs: self.library_dirs(),
            ..Default::default()
        }
    }
}
