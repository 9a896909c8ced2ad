//! Status consistency invariant: status is always derived from the board.

use super::Invariant;
use crate::rules;
use crate::types::GameState;

/// Invariant: the stored status equals a fresh evaluation of the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.status() == rules::evaluate(state.board())
    }

    fn description() -> &'static str {
        "Status matches the board evaluation"
    }
}
