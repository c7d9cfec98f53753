//! Error kinds surfaced while loading a circuit board.
//!
//! The search itself cannot fail: every precondition is enforced by
//! construction, so errors only arise from reading and parsing input.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading and parsing a board file.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The input path could not be read.
    #[error("cannot read {}: {source}", path.display())]
    FileNotFound {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The file content violates the board format rules.
    #[error("invalid format: {0}")]
    InvalidFormat(#[from] FormatViolation),
}

/// A specific board-format rule violation, with enough context to locate
/// the problem. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatViolation {
    /// No non-blank line to read the dimensions from.
    #[error("missing `rows cols` header line")]
    MissingHeader,

    /// The header line is not exactly two positive integers.
    #[error("bad header {header:?}: expected two positive integers")]
    BadHeader { header: String },

    /// A cell token outside `O`, `X`, `1`, `2`.
    #[error("unknown token {token:?} on line {line}")]
    UnknownToken { token: String, line: usize },

    /// The token count does not match the declared dimensions.
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    /// No `1` token anywhere on the board.
    #[error("board has no start component")]
    MissingStart,

    /// More than one `1` token.
    #[error("second start component on line {line}")]
    DuplicateStart { line: usize },

    /// No `2` token anywhere on the board.
    #[error("board has no end component")]
    MissingEnd,

    /// More than one `2` token.
    #[error("second end component on line {line}")]
    DuplicateEnd { line: usize },
}
