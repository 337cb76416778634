//! Probe engine module.
//!
//! Provides probe orchestration and the aggregate report.

pub mod orchestrator;
pub mod result;
