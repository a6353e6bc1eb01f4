//! Location bookkeeping invariant: locations track history exactly.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: one recorded location per ply, each naming the cell that
/// changed at that ply, with the pointer in range.
pub struct LocationLockstep;

impl Invariant<Game> for LocationLockstep {
    fn holds(game: &Game) -> bool {
        if game.locations().len() + 1 != game.history().len() {
            return false;
        }
        if game.pointer() >= game.history().len() {
            return false;
        }
        game.locations().iter().enumerate().all(|(k, &pos)| {
            game.history()[k].get(pos) == Square::Empty
                && matches!(game.history()[k + 1].get(pos), Square::Occupied(_))
        })
    }

    fn description() -> &'static str {
        "each ply has one recorded location naming the cell it filled"
    }
}
