//! Application state and logic.

use ratatui::layout::Rect;
use tictactoe_core::{GameState, Position, Session};
use tracing::{debug, info, instrument};

use crate::input::Action;
use crate::theme::Theme;

/// Main application state.
///
/// Holds one game session plus presentation-only state. Game rules live
/// entirely in the engine; the app forwards cell indices and re-renders.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    theme: Theme,
    notice: Option<String>,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(theme: Theme) -> Self {
        Self {
            session: Session::new(),
            cursor: Position::Center,
            theme,
            notice: None,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Why the last move was ignored, until the next successful action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The restart button is shown only once the game is over.
    pub fn restart_available(&self) -> bool {
        self.state().status().is_terminal()
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Area of the last drawn frame, used for mouse hit-testing.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Records the area of the frame being drawn.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Handles a user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Place(index) => self.place(index),
            Action::PlaceAtCursor => self.place(self.cursor.to_index()),
            Action::MoveCursor(d_row, d_col) => {
                self.cursor = self.cursor.step(d_row, d_col);
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                info!(theme = %self.theme, "Theme changed");
            }
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, index: usize) {
        match self.session.play(index) {
            Ok(state) => {
                debug!(index, status = %state.status(), "Move accepted");
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.notice = None;
            }
            Err(e) => {
                debug!(index, error = %e, "Move ignored");
                self.notice = Some(e.to_string());
            }
        }
    }

    fn restart(&mut self) {
        if !self.restart_available() {
            debug!("Restart ignored while game in progress");
            return;
        }
        self.session.restart();
        self.cursor = Position::Center;
        self.notice = None;
        info!("Game restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Cell, GameStatus, Player};

    fn app_after(indices: &[usize]) -> App {
        let mut app = App::new(Theme::Light);
        for &index in indices {
            app.apply(Action::Place(index));
        }
        app
    }

    #[test]
    fn test_click_places_current_player() {
        let app = app_after(&[2]);
        assert_eq!(app.state().board().get(2), Some(Cell::Occupied(Player::X)));
        assert_eq!(app.state().current_player(), Player::O);
        assert_eq!(app.cursor(), Position::TopRight);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_rejected_move_keeps_state_and_sets_notice() {
        let mut app = app_after(&[4]);
        let before = *app.state();
        app.apply(Action::Place(4));
        assert_eq!(app.state(), &before);
        assert_eq!(app.notice(), Some("Center is already occupied"));

        app.apply(Action::Place(0));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new(Theme::Light);
        app.apply(Action::MoveCursor(-1, -1));
        assert_eq!(app.cursor(), Position::TopLeft);
        app.apply(Action::PlaceAtCursor);
        assert_eq!(app.state().board().get(0), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_restart_only_when_terminal() {
        let mut app = app_after(&[0, 1]);
        app.apply(Action::Restart);
        assert_eq!(app.state().board().filled(), 2);
        assert!(!app.restart_available());

        for index in [3, 4, 6] {
            app.apply(Action::Place(index));
        }
        assert_eq!(app.state().status(), GameStatus::Won(Player::X));
        assert!(app.restart_available());

        app.apply(Action::Restart);
        assert_eq!(app.state(), &GameState::new());
        assert!(!app.restart_available());
    }

    #[test]
    fn test_moves_ignored_after_win() {
        let mut app = app_after(&[0, 1, 3, 4, 6]);
        let before = *app.state();
        app.apply(Action::Place(8));
        assert_eq!(app.state(), &before);
        assert!(app.notice().is_some());
    }

    #[test]
    fn test_theme_toggle_leaves_game_alone() {
        let mut app = app_after(&[4, 0]);
        let before = *app.state();
        app.apply(Action::ToggleTheme);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.state(), &before);
        app.apply(Action::ToggleTheme);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Theme::Dark);
        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
