//! Rejection reasons for moves.

use crate::position::Position;
use crate::types::GameStatus;

/// Why the engine refused a move.
///
/// Rejection is never fatal: the caller keeps the state it already had and
/// decides whether to surface the reason.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The game is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// The index does not name a cell.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// The cell at the position is already marked.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for InvalidMove {}
