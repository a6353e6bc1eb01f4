//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// The 8 winning lines in canonical scan order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// The winning player.
    pub player: Player,
    /// The three positions forming the line.
    pub line: [Position; 3],
}

impl WinLine {
    /// Whether the given position belongs to the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks for a completed line on the board.
///
/// Scans [`LINES`] in order and returns the first complete one. The scan
/// order is the tie-break for boards holding more than one complete line.
pub fn check_winner(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(WinLine { player, line });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X))
            .with(Position::TopRight, Square::Occupied(Player::X));
        let win = check_winner(&board).expect("top row complete");
        assert_eq!(win.player, Player::X);
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::O))
            .with(Position::Center, Square::Occupied(Player::O))
            .with(Position::BottomRight, Square::Occupied(Player::O));
        let win = check_winner(&board).expect("diagonal complete");
        assert_eq!(win.player, Player::O);
        assert!(win.contains(Position::Center));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }
}
