//! Application state and key dispatch.

use crossterm::event::KeyCode;
use threerow::{Game, Position};
use tracing::debug;

use crate::input;

/// Which panel receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board grid.
    Board,
    /// The move-history list.
    Moves,
}

/// Main application state.
///
/// Wraps the pure [`Game`] and the presentation-only cursor, focus, and
/// list selection. Every game update goes through the engine's pure
/// operations; a rejected interaction is detected by equality and leaves
/// the app unchanged apart from a debug log line.
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the highlighted move-list row, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            KeyCode::Char('s') => {
                self.game = self.game.toggle_sort_order();
                // Keep the highlight on the same entry after reversal.
                self.selected = self.game.history().len() - 1 - self.selected;
            }
            KeyCode::Char('r') => self.restart(),
            key => match self.focus {
                Focus::Board => self.board_key(key),
                Focus::Moves => self.moves_key(key),
            },
        }
    }

    fn board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.play(pos);
                }
            }
            _ => {}
        }
    }

    fn moves_key(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter => {
                if let Some(entry) = self.game.moves().get(self.selected).copied() {
                    self.game = self.game.jump_to(entry.number);
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        let next = self.game.play(pos);
        if next == self.game {
            debug!(position = ?pos, "interaction ignored");
            return;
        }
        self.game = next;
        self.selected = self.displayed_index(self.game.pointer());
    }

    /// Display-order row of a given move number under the current sort.
    fn displayed_index(&self, number: usize) -> usize {
        if self.game.sorted() {
            number
        } else {
            self.game.history().len() - 1 - number
        }
    }

    /// Resets to a fresh game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game = Game::new();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected = 0;
    }
}
