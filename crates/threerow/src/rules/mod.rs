//! Game rules for three-in-a-row.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Outcome is always derived on demand, never cached, so jumping across
//! history cannot observe a stale status.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinLine, check_winner};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won(WinLine),
    /// Board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(win) => Some(win.player),
            _ => None,
        }
    }

    /// True once the game can no longer accept moves.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(win) => write!(f, "Player {} wins", win.player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a snapshot.
///
/// A complete line wins; a full board with no line is a draw; anything
/// else is still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(win) = check_winner(board) {
        return Outcome::Won(win);
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
