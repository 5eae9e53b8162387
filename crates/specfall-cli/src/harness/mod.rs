//! Fallback harness infrastructure
//!
//! Provides spec-file discovery and the run reporter that drives
//! extraction and heuristic evaluation per file.

pub mod discovery;
pub mod reporter;

pub use discovery::{DiscoveryError, FileSet, DEFAULT_SPEC_DIR};
pub use reporter::{RunReporter, RunTally};
