//! Single winner invariant: at most one player owns a complete line.

use super::Invariant;
use crate::rules;
use crate::types::GameState;

/// Invariant: no board holds complete lines for both players.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        rules::winning_players(state.board()).len() <= 1
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
