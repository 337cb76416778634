//! Platform abstraction layer.
//!
//! Provides consistent interfaces for:
//! - Linux kernel and filesystem information
//! - Dynamic loading of shared libraries
//! - ELF symbol tables

pub mod dynlib;
pub mod elf;
pub mod linux;
