//! Stateless rendering of the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, GameState, GameStatus, Player, Position};

use crate::app::App;
use crate::theme::{Palette, Theme};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + GAP * 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP * 2;
const TOGGLE_WIDTH: u16 = 12;
const RESTART_WIDTH: u16 = 18;

/// Status line shown under the board.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("Next turn: {}", state.current_player()),
        GameStatus::Won(player) => format!("Winner: {}!", player),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

/// A clickable widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Board cell by index.
    Cell(usize),
    /// The light/dark toggle.
    ThemeToggle,
    /// The restart button.
    Restart,
}

/// Screen areas for one viewport size.
///
/// Drawing and mouse hit-testing share this layout so a click always lands
/// on what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Theme toggle button, top right.
    pub toggle: Rect,
    /// Title and subtitle.
    pub header: Rect,
    /// Board cells in index order.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// Restart button.
    pub restart: Rect,
    /// Key help or the last rejection notice.
    pub help: Rect,
}

impl Regions {
    /// Lays out the screen.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),            // Toggle
                Constraint::Length(1),
                Constraint::Length(2),            // Title + subtitle
                Constraint::Length(1),
                Constraint::Length(BOARD_HEIGHT), // Board
                Constraint::Length(1),
                Constraint::Length(1),            // Status
                Constraint::Length(1),
                Constraint::Length(3),            // Restart
                Constraint::Length(1),            // Help
                Constraint::Min(0),
            ])
            .split(area);

        let toggle_row = chunks[0];
        let toggle_width = TOGGLE_WIDTH.min(toggle_row.width);
        let toggle = Rect::new(
            toggle_row.right().saturating_sub(toggle_width),
            toggle_row.y,
            toggle_width,
            toggle_row.height,
        );

        Self {
            toggle,
            header: chunks[2],
            cells: board_cells(center_rect(chunks[4], BOARD_WIDTH, BOARD_HEIGHT)),
            status: chunks[6],
            restart: center_rect(chunks[8], RESTART_WIDTH, 3),
            help: chunks[9],
        }
    }

    /// Returns the widget under a screen coordinate.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let hit = |r: Rect| column >= r.x && column < r.right() && row >= r.y && row < r.bottom();

        if hit(self.toggle) {
            return Some(Target::ThemeToggle);
        }
        if let Some(index) = self.cells.iter().position(|r| hit(*r)) {
            return Some(Target::Cell(index));
        }
        if hit(self.restart) {
            return Some(Target::Restart);
        }
        None
    }
}

fn board_cells(board: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(GAP),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(GAP),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board);

    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(GAP),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(GAP),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);
        for col in 0..3 {
            cells[row * 3 + col] = cols[col * 2];
        }
    }
    cells
}

/// Renders the whole screen for the app's current state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();
    let regions = Regions::compute(area);
    let state = app.state();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    draw_toggle(frame, &regions, app, &palette);
    draw_header(frame, &regions, &palette);
    for pos in Position::ALL {
        draw_cell(frame, regions.cells[pos.to_index()], state, pos, app.cursor(), &palette);
    }

    let status_style = match state.status() {
        GameStatus::InProgress => Style::default().fg(palette.text),
        GameStatus::Won(_) => Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::BOLD),
    };
    frame.render_widget(
        Paragraph::new(status_line(state))
            .style(status_style)
            .alignment(Alignment::Center),
        regions.status,
    );

    if app.restart_available() {
        let button = Paragraph::new("Restart Game")
            .style(
                Style::default()
                    .fg(palette.accent_text)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            );
        frame.render_widget(button, regions.restart);
    }

    let help = match app.notice() {
        Some(notice) => Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(palette.text_secondary).add_modifier(Modifier::ITALIC),
        )),
        None => Line::from(Span::styled(
            help_text(app.restart_available(), app.theme()),
            Style::default().fg(palette.text_secondary),
        )),
    };
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), regions.help);
}

fn help_text(restart_available: bool, theme: Theme) -> String {
    let keys = if restart_available {
        "r restart"
    } else {
        "arrows move · enter/1-9/click place"
    };
    format!("{} · t {} · q quit", keys, theme.toggle_hint().to_lowercase())
}

fn draw_toggle(frame: &mut Frame, regions: &Regions, app: &App, palette: &Palette) {
    let toggle = Paragraph::new(app.theme().toggle_label())
        .style(Style::default().fg(palette.accent_text).bg(palette.accent))
        .alignment(Alignment::Center);
    frame.render_widget(toggle, regions.toggle);
}

fn draw_header(frame: &mut Frame, regions: &Regions, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Local Two Player",
            Style::default().fg(palette.text_secondary),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        regions.header,
    );
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    pos: Position,
    cursor: Position,
    palette: &Palette,
) {
    let index = pos.to_index();
    let cell = state.board().get(index).unwrap_or(Cell::Empty);
    let disabled = !cell.is_empty() || state.status().is_terminal();

    let (text, mut style) = match cell {
        Cell::Empty => (
            (index + 1).to_string(),
            Style::default().fg(palette.border),
        ),
        Cell::Occupied(player) => (
            player.symbol().to_string(),
            Style::default().fg(mark_color(player, palette)).add_modifier(Modifier::BOLD),
        ),
    };
    if disabled && cell.is_empty() {
        style = style.add_modifier(Modifier::DIM);
    }

    let border = if pos == cursor && !disabled {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else if pos == cursor {
        Style::default().fg(palette.text_secondary)
    } else {
        Style::default().fg(palette.border)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .style(Style::default().bg(palette.surface)),
        );
    frame.render_widget(paragraph, area);
}

fn mark_color(player: Player, palette: &Palette) -> ratatui::style::Color {
    match player {
        Player::X => palette.mark_x,
        Player::O => palette.mark_o,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
