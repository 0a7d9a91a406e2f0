//! Error types for board construction and piece supply.
//!
//! Out-of-range lookups and illegal moves are not errors; they are answered
//! with `None` / `false` / an empty effect log.

/// A piece source could not produce the next piece.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("piece source exhausted after {drawn} pieces")]
    Exhausted { drawn: usize },

    #[error("piece source failed: {0}")]
    Failed(String),
}

/// Errors raised while building or settling a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("expected {expected} cells for the board, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Source(#[from] SourceError),
}

pub type Result<T, E = BoardError> = std::result::Result<T, E>;
