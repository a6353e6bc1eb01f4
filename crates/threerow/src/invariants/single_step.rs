//! History step invariant: each ply adds exactly one mark.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::Square;
use strum::IntoEnumIterator;

/// Invariant: consecutive snapshots differ in exactly one cell, empty in
/// the earlier snapshot and occupied in the later one.
pub struct SingleStepHistory;

impl Invariant<Game> for SingleStepHistory {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let changed: Vec<Position> = Position::iter()
                .filter(|&pos| pair[0].get(pos) != pair[1].get(pos))
                .collect();
            match changed.as_slice() {
                [pos] => {
                    pair[0].get(*pos) == Square::Empty
                        && matches!(pair[1].get(*pos), Square::Occupied(_))
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "consecutive snapshots differ by exactly one newly occupied cell"
    }
}
