//! Pure tic-tac-toe game engine.
//!
//! The engine owns the rules: turn alternation, move legality, win
//! detection across the 8 lines, and draw detection. It performs no I/O;
//! presentation layers hold a [`GameState`] (or a [`Session`]), forward cell
//! indices to [`GameEngine::apply_move`], and re-render from the result.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, Player};
//!
//! let mut state = GameEngine::restart();
//! for index in [0, 1, 3, 4, 6] {
//!     state = GameEngine::apply_move(&state, index)?;
//! }
//! assert_eq!(state.status(), GameStatus::Won(Player::X));
//!
//! // Terminal games reject every move and keep their state.
//! assert!(GameEngine::apply_move(&state, 8).is_err());
//! # Ok::<(), tictactoe_core::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
mod invariants;
mod position;
mod rules;
mod types;

pub use contracts::{
    CellIsEmpty, ConsistentState, Contract, GameInProgress, InRange, LegalMove, MonotonicBoard,
    MoveContract,
};
pub use engine::{GameEngine, Session};
pub use error::InvalidMove;
pub use invariants::{
    CurrentPlayerInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleWinnerInvariant, StatusConsistentInvariant, TurnBalanceInvariant,
};
pub use position::Position;
pub use rules::{TRIPLES, check_winner, is_full, winning_players};
pub use types::{Board, Cell, GameState, GameStatus, Player};
