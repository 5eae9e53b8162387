//! Core error types

use thiserror::Error;

/// Errors surfaced while bounding declaration blocks.
///
/// Extraction is deliberately lenient: the only failure mode is an
/// unterminated block under [`Strictness::Strict`](crate::Strictness).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The scan for a block's closing brace ran off the end of the file
    #[error("unterminated {kind} block \"{name}\": no matching closing brace before end of file")]
    UnterminatedBlock {
        /// Declaration keyword (`describe` or `it`)
        kind: &'static str,
        /// Name given in the declaration
        name: String,
    },
}
