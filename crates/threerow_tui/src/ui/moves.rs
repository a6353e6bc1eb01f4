//! Move-history panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::{App, Focus};

/// Renders the move list in the current sort order.
pub fn render_moves(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let direction = if game.sorted() {
        "oldest first"
    } else {
        "newest first"
    };

    let items: Vec<ListItem> = game
        .moves()
        .iter()
        .map(|entry| {
            let term = match entry.location {
                Some(pos) => format!("{} {}", entry.number, pos.coordinate()),
                None => entry.number.to_string(),
            };
            let line = if entry.number == game.pointer() {
                Line::styled(
                    format!("You are at move #{term}"),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            } else if entry.number == 0 {
                Line::raw("Go to game start")
            } else {
                Line::raw(format!("Go to move #{term}"))
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Moves ({direction})")),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::Moves {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
