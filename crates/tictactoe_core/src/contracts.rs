//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, index)} apply_move {Q(before, after)}

use crate::error::InvalidMove;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::types::{Board, Cell, GameState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvalidMove>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the input state satisfies every [`GameInvariants`] member.
///
/// Reachable states always do; this guards states built by deserialization.
pub struct ConsistentState;

impl ConsistentState {
    /// Rejects states the engine could never have produced.
    pub fn check(state: &GameState) -> Result<(), InvalidMove> {
        GameInvariants::check_all(state).map_err(|violations| {
            let descriptions = violations
                .into_iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move rejected on inconsistent state");
            InvalidMove::InvariantViolation(format!("Precondition failed: {}", descriptions))
        })
    }
}

/// Precondition: the game must still accept moves.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects terminal states.
    pub fn check(state: &GameState) -> Result<(), InvalidMove> {
        if state.status().is_terminal() {
            Err(InvalidMove::GameOver(state.status()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index must name one of the 9 cells.
pub struct InRange;

impl InRange {
    /// Converts the index into a position or rejects it.
    pub fn check(index: usize) -> Result<Position, InvalidMove> {
        Position::from_index(index).ok_or(InvalidMove::OutOfRange { index })
    }
}

/// Precondition: the cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    pub fn check(state: &GameState, pos: Position) -> Result<(), InvalidMove> {
        if state.board().is_empty(pos.to_index()) {
            Ok(())
        } else {
            Err(InvalidMove::Occupied(pos))
        }
    }
}

/// Composite precondition, checked in order: state consistent, game in
/// progress, index in range, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, index: usize) -> Result<Position, InvalidMove> {
        ConsistentState::check(state)?;
        GameInProgress::check(state)?;
        let pos = InRange::check(index)?;
        CellIsEmpty::check(state, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition check
// ─────────────────────────────────────────────────────────────

/// Transition property: exactly one empty cell was marked, and no marked
/// cell changed or reverted.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Compares the boards before and after a move.
    pub fn holds(before: &Board, after: &Board) -> bool {
        let mut newly_marked = 0;
        for (old, new) in before.cells().iter().zip(after.cells()) {
            match (old, new) {
                (Cell::Empty, Cell::Empty) => {}
                (Cell::Empty, Cell::Occupied(_)) => newly_marked += 1,
                (Cell::Occupied(_), _) if old != new => return false,
                (Cell::Occupied(_), _) => {}
            }
        }
        newly_marked == 1
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move application.
///
/// Preconditions:
/// - All [`GameInvariants`] hold
/// - Game in progress
/// - Index in range
/// - Cell empty
///
/// Postconditions:
/// - Board changed monotonically by one mark
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, index: &usize) -> Result<(), InvalidMove> {
        LegalMove::check(state, *index).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), InvalidMove> {
        let mut failures = Vec::new();
        if !MonotonicBoard::holds(before.board(), after.board()) {
            failures.push("Board changed by exactly one new mark".to_string());
        }
        if let Err(violations) = GameInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let descriptions = failures.join("; ");
            warn!(%descriptions, "Move postcondition failed");
            Err(InvalidMove::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        }
    }
}
