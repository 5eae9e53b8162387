//! Specfall Core - structure validation for Lua-style spec files
//!
//! This library provides the validation pipeline for the fallback runner:
//! - Brace-depth block scanning
//! - `describe`/`it` declaration extraction
//! - Heuristic pass/fail classification
//!
//! Nothing here executes test code. The evaluator policies classify a case
//! from lexical signals alone and say so in every verdict they produce.

/// Specfall core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod scanner;

// Re-export commonly used types
pub use error::ExtractError;
pub use evaluate::{Evaluate, LexicalPolicy, StructuralPolicy, Verdict};
pub use extract::{Block, Strictness, TestCase, TestExtractor};
pub use scanner::{scan_block, BlockScan};
