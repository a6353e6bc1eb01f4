//! Mark balance invariant: X leads O by zero or one in every snapshot.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: marks alternate starting with X.
///
/// Snapshot k holds exactly k marks, and in every snapshot the X count
/// leads the O count by zero or one.
pub struct BalancedMarks;

impl Invariant<Game> for BalancedMarks {
    fn holds(game: &Game) -> bool {
        game.history().iter().enumerate().all(|(k, board)| {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            x + o == k && (x == o || x == o + 1)
        })
    }

    fn description() -> &'static str {
        "X count leads O count by zero or one in every snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    #[test]
    fn test_holds_for_new_game() {
        assert!(BalancedMarks::holds(&Game::new()));
    }

    #[test]
    fn test_holds_through_alternating_plies() {
        let game = Game::new()
            .play(Position::TopLeft)
            .play(Position::Center)
            .play(Position::TopRight)
            .play(Position::BottomLeft);
        assert!(BalancedMarks::holds(&game));
    }

    #[test]
    fn test_detects_double_mark() {
        let mut game = Game::new().play(Position::TopLeft);
        // Hand O an extra mark without a ply.
        let bad = game
            .board()
            .with(Position::Center, Square::Occupied(Player::O))
            .with(Position::BottomRight, Square::Occupied(Player::O));
        game.history.push(bad);
        assert!(!BalancedMarks::holds(&game));
    }
}
