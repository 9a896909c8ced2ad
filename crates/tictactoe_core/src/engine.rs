//! Game engine: the only producer of new game states.

use crate::contracts::LegalMove;
#[cfg(debug_assertions)]
use crate::contracts::{Contract, MoveContract};
use crate::error::InvalidMove;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameState, GameStatus};
use tracing::{debug, instrument};

/// Tic-tac-toe rules engine.
///
/// Every operation is a pure function of its inputs. The engine holds no
/// state; callers own their [`GameState`] and pass it in.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEngine;

impl GameEngine {
    /// Applies the current player's mark at `index` (0-8).
    ///
    /// On success returns the next state: the mark is placed, the status is
    /// re-evaluated, and the turn passes to the opponent unless the game just
    /// ended. The input state is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, the index is out of
    /// range, or the cell is occupied. The caller's state stays as it was.
    /// A state that breaks the game invariants (for example one deserialized
    /// from a hand-edited snapshot) is rejected with
    /// [`InvalidMove::InvariantViolation`] in every build profile.
    #[instrument(skip(state), fields(player = %state.current_player(), status = %state.status()))]
    pub fn apply_move(state: &GameState, index: usize) -> Result<GameState, InvalidMove> {
        let pos = LegalMove::check(state, index)?;

        let player = state.current_player();
        let mut board = *state.board();
        board.place(pos.to_index(), player);

        let status = Self::evaluate(&board);
        let current_player = if status.is_in_progress() {
            player.opponent()
        } else {
            player
        };
        let next = GameState {
            board,
            current_player,
            status,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(state, &next)?;

        debug!(position = %pos, %status, "Move applied");
        Ok(next)
    }

    /// Derives the status of a board: first complete triple wins, a full
    /// board draws, anything else is in progress.
    pub fn evaluate(board: &Board) -> GameStatus {
        rules::evaluate(board)
    }

    /// Produces a fresh game: empty board, X to move, in progress.
    #[instrument]
    pub fn restart() -> GameState {
        GameState::new()
    }

    /// Positions that would be accepted right now. Empty once the game ends.
    pub fn legal_moves(state: &GameState) -> Vec<Position> {
        if state.status().is_terminal() {
            Vec::new()
        } else {
            Position::open(state.board())
        }
    }
}

/// One independent playthrough owning exactly one [`GameState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: GameState,
}

impl Session {
    /// Starts a session with a fresh game.
    pub fn new() -> Self {
        Self {
            state: GameEngine::restart(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays the current player's mark at `index`.
    ///
    /// The session's state is replaced only when the engine accepts the move.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<&GameState, InvalidMove> {
        self.state = GameEngine::apply_move(&self.state, index)?;
        Ok(&self.state)
    }

    /// Replaces the game with a fresh one, whatever its status.
    #[instrument(skip(self), fields(status = %self.state.status()))]
    pub fn restart(&mut self) -> &GameState {
        self.state = GameEngine::restart();
        &self.state
    }

    /// Positions that would be accepted right now.
    pub fn legal_moves(&self) -> Vec<Position> {
        GameEngine::legal_moves(&self.state)
    }
}
