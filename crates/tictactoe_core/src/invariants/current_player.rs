//! Current player invariant: the player to move follows from the mark counts.

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: while the game is in progress, X moves iff both players have
/// the same number of marks.
///
/// Terminal states keep the last mover and are not constrained.
pub struct CurrentPlayerInvariant;

impl Invariant<GameState> for CurrentPlayerInvariant {
    fn holds(state: &GameState) -> bool {
        if state.status().is_terminal() {
            return true;
        }
        let board = state.board();
        let expected = if board.count(Player::X) == board.count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEngine;

    #[test]
    fn test_empty_game_holds() {
        assert!(CurrentPlayerInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut state = GameState::new();
        for index in [0, 4, 2, 6, 8] {
            state = GameEngine::apply_move(&state, index).expect("legal move");
            assert!(CurrentPlayerInvariant::holds(&state));
        }
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameEngine::apply_move(&GameState::new(), 4).expect("legal move");
        state.current_player = Player::X;
        assert!(!CurrentPlayerInvariant::holds(&state));
    }
}
