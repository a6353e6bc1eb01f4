//! Stateless UI rendering.

mod board;
mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

/// Renders the full frame: title, board and move list, status bar.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Threerow - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    board::render_board(frame, panels[0], app);
    moves::render_moves(frame, panels[1], app);

    let hints = match app.focus() {
        Focus::Board => "arrows + enter or 1-9 play | tab: history | s: sort | r: restart | q: quit",
        Focus::Moves => "arrows select | enter jumps | tab: board | s: sort | r: restart | q: quit",
    };
    let status = Paragraph::new(app.game().status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(hints));
    frame.render_widget(status, chunks[2]);
}
