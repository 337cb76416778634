//! Dynamic library loading.
//!
//! [`SharedLibraryLoader`] opens a library by name through the system
//! loader's own search path; [`LoadedLibrary`] resolves symbols in it.
//! A loaded library is released when its box is dropped, so every exit
//! path of a caller closes the handle.

use crate::FipsDetectError;
use std::ffi::c_void;
use tracing::trace;

/// A shared library that is currently loaded.
pub trait LoadedLibrary {
    /// Name the library was opened with
    fn name(&self) -> &str;

    /// Resolve `symbol`, returning an error if it is not exported.
    fn resolve(&self, symbol: &str) -> Result<(), FipsDetectError>;
}

/// Opens shared libraries by name.
pub trait SharedLibraryLoader {
    /// Load `name`, e.g. `libcrypto.so.3`.
    fn open(&self, name: &str) -> Result<Box<dyn LoadedLibrary>, FipsDetectError>;
}

/// Loader backed by the platform `dlopen`/`dlsym`/`dlclose`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibloadingLoader;

impl LibloadingLoader {
    pub fn new() -> Self {
        LibloadingLoader
    }
}

impl SharedLibraryLoader for LibloadingLoader {
    fn open(&self, name: &str) -> Result<Box<dyn LoadedLibrary>, FipsDetectError> {
        // SAFETY: loading runs the library's initialisers. The candidates are
        // system crypto libraries whose constructors have no preconditions on
        // this process.
        let library = unsafe { libloading::Library::new(name) }.map_err(|e| {
            FipsDetectError::LibraryLoad {
                library: name.to_string(),
                message: e.to_string(),
            }
        })?;

        trace!(library = name, "loaded shared library");
        Ok(Box::new(LibloadingLibrary {
            name: name.to_string(),
            library,
        }))
    }
}

struct LibloadingLibrary {
    name: String,
    library: libloading::Library,
}

impl LoadedLibrary for LibloadingLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, symbol: &str) -> Result<(), FipsDetectError> {
        // SAFETY: the symbol address is only checked for presence, never
        // called or dereferenced, so the pointer type is irrelevant.
        let lookup = unsafe { self.library.get::<*mut c_void>(symbol.as_bytes()) };

        lookup.map(|_| ()).map_err(|e| FipsDetectError::SymbolNotFound {
            library: self.name.clone(),
            symbol: symbol.to_string(),
            message: e.to_string(),
        })
    }
}

impl Drop for LibloadingLibrary {
    fn drop(&mut self) {
        trace!(library = %self.name, "releasing shared library");
    }
}
