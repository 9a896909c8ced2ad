//! Maps terminal input to front end actions.

use crate::view::{Regions, Target};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Something the user asked the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at the given cell index.
    Place(usize),
    /// Play at the cursor.
    PlaceAtCursor,
    /// Move the cursor by a row/column offset.
    MoveCursor(isize, isize),
    /// Switch between light and dark.
    ToggleTheme,
    /// Start a new game (only honored once the game is over).
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action.
///
/// Digits `1`-`9` address cells by their 1-based number, as drawn on empty
/// cells.
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left => Some(Action::MoveCursor(0, -1)),
        KeyCode::Right => Some(Action::MoveCursor(0, 1)),
        KeyCode::Up => Some(Action::MoveCursor(-1, 0)),
        KeyCode::Down => Some(Action::MoveCursor(1, 0)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::Place(digit as usize - 1)),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a left click to the widget under the pointer.
pub fn action_for_mouse(event: MouseEvent, viewport: Rect) -> Option<Action> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    match Regions::compute(viewport).target_at(event.column, event.row)? {
        Target::Cell(index) => Some(Action::Place(index)),
        Target::ThemeToggle => Some(Action::ToggleTheme),
        Target::Restart => Some(Action::Restart),
    }
}
