//! Rendering tests against ratatui's in-memory backend.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};
use tictactoe_core::{Cell, Player};
use tictactoe_tui::{Action, App, Regions, Theme, action_for_mouse, draw};

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|frame| {
            app.set_viewport(frame.area());
            draw(frame, app);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn play(app: &mut App, indices: &[usize]) {
    for &index in indices {
        app.apply(Action::Place(index));
    }
}

#[test]
fn test_new_game_screen() {
    let mut app = App::new(Theme::Light);
    let screen = render(&mut app);
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Local Two Player"));
    assert!(screen.contains("Next turn: X"));
    assert!(screen.contains("Dark"));
    assert!(!screen.contains("Restart Game"));
}

#[test]
fn test_winner_screen_offers_restart() {
    let mut app = App::new(Theme::Light);
    play(&mut app, &[0, 1, 3, 4, 6]);
    let screen = render(&mut app);
    assert!(screen.contains("Winner: X!"));
    assert!(screen.contains("Restart Game"));
}

#[test]
fn test_draw_screen() {
    let mut app = App::new(Theme::Dark);
    play(&mut app, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);
    let screen = render(&mut app);
    assert!(screen.contains("It's a draw!"));
    assert!(screen.contains("Light"));
    assert!(screen.contains("Restart Game"));
}

#[test]
fn test_rejection_notice_rendered() {
    let mut app = App::new(Theme::Light);
    play(&mut app, &[4, 4]);
    let screen = render(&mut app);
    assert!(screen.contains("Center is already occupied"));
    assert!(screen.contains("Next turn: O"));
}

#[test]
fn test_viewport_recorded_for_clicks() {
    let mut app = App::new(Theme::Light);
    render(&mut app);
    let cell = Regions::compute(app.viewport()).cells[8];
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: cell.x + 1,
        row: cell.y + 1,
        modifiers: KeyModifiers::NONE,
    };
    let action = action_for_mouse(click, app.viewport()).expect("cell under click");
    app.apply(action);
    let screen = render(&mut app);
    assert!(screen.contains("Next turn: O"));
    assert_eq!(
        app.state().board().get(8),
        Some(Cell::Occupied(Player::X))
    );
}
