//! Board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use threerow::{Outcome, Player, Position, Square, WinLine};

use crate::app::{App, Focus};

/// Renders the board grid with cursor and winning-line highlights.
pub fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 12);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let win = match app.game().outcome() {
        Outcome::Won(win) => Some(win),
        _ => None,
    };

    render_row(
        frame,
        rows[0],
        app,
        win,
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
    );
    render_separator(frame, rows[1]);
    render_row(
        frame,
        rows[2],
        app,
        win,
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    );
    render_separator(frame, rows[3]);
    render_row(
        frame,
        rows[4],
        app,
        win,
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    );
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    win: Option<WinLine>,
    positions: [Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(frame, cols[0], app, win, positions[0]);
    render_vertical_sep(frame, cols[1]);
    render_square(frame, cols[2], app, win, positions[1]);
    render_vertical_sep(frame, cols[3]);
    render_square(frame, cols[4], app, win, positions[2]);
}

fn render_square(frame: &mut Frame, area: Rect, app: &App, win: Option<WinLine>, pos: Position) {
    let (text, style) = match app.game().board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if win.is_some_and(|w| w.contains(pos)) {
        style.bg(Color::Yellow).fg(Color::Black)
    } else {
        style
    };
    let style = if app.focus() == Focus::Board && pos == app.cursor() {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
