//! Error types for the crossword engine.
//!
//! Grid and extraction operations are total and never return these; only
//! construction with a bad size, multi-character cell input, document import,
//! and solver responses can fail.

use thiserror::Error;

pub type PuzzleResult<T> = Result<T, PuzzleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid grid size: {size}")]
    InvalidSize { size: usize },

    #[error("Invalid cell input: {input:?} (expected at most one character)")]
    InvalidInput { input: String },

    #[error("Malformed document: {reason}")]
    MalformedDocument { reason: String },

    #[error("No solution found")]
    NoSolutionFound,

    #[error("No progress found")]
    NoProgressFound,
}

impl PuzzleError {
    pub fn invalid_size(size: usize) -> Self {
        Self::InvalidSize { size }
    }

    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput { input: input.into() }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument { reason: reason.into() }
    }
}
