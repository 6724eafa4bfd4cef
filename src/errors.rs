//! Errors returned by the recoverable, input-facing parts of the crate.
//!
//! Square labels, FEN fixtures, and coordinate-move lookup can all be fed
//! bad text by a caller, so they return `Result<_, ChessError>`. Internal
//! corruption (history depth mismatch, a king record that does not point at
//! a king) is not represented here: those paths assert and abort.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square label outside `a1..h8`.
    #[error("invalid square label: {0}")]
    InvalidSquare(String),

    /// A FEN string that could not be turned into a position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Coordinate text that is malformed or names no legal move.
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
