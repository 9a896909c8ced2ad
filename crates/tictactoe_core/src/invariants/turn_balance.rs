//! Turn balance invariant: X leads O by zero or one mark.

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and players alternate, so O can never be ahead
/// and X can never be two marks ahead.
pub struct TurnBalanceInvariant;

impl Invariant<GameState> for TurnBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, GameStatus};
    use crate::GameEngine;

    fn with_board(board: Board) -> GameState {
        GameState {
            board,
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(TurnBalanceInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut state = GameState::new();
        for index in [4, 0, 8, 2] {
            state = GameEngine::apply_move(&state, index).expect("legal move");
            assert!(TurnBalanceInvariant::holds(&state));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut board = Board::new();
        board.place(0, Player::O);
        assert!(!TurnBalanceInvariant::holds(&with_board(board)));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut board = Board::new();
        board.place(0, Player::X);
        board.place(1, Player::X);
        assert!(!TurnBalanceInvariant::holds(&with_board(board)));
    }
}
