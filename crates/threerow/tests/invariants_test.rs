//! Invariant checks over played, jumped, and branched games.

use threerow::Game;
use threerow::Position;
use threerow::invariants::{InvariantSet, ReplayInvariants};

fn play_all(moves: &[usize]) -> Game {
    moves.iter().fold(Game::new(), |game, &index| {
        game.play(Position::from_index(index).expect("test index in range"))
    })
}

#[test]
fn test_invariants_hold_for_new_game() {
    assert!(ReplayInvariants::check_all(&Game::new()).is_ok());
}

#[test]
fn test_invariants_hold_through_full_game() {
    let mut game = Game::new();
    for index in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
        game = game.play(Position::from_index(index).unwrap());
        assert!(ReplayInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_invariants_hold_after_jump_and_branch() {
    let game = play_all(&[0, 4, 8, 1]).jump_to(2).play(Position::TopCenter);
    assert!(ReplayInvariants::check_all(&game).is_ok());
}

#[test]
fn test_invariants_hold_after_rejected_interactions() {
    let game = play_all(&[0, 3, 1, 4, 2]);
    let after = game.play(Position::TopLeft).jump_to(99);
    assert!(ReplayInvariants::check_all(&after).is_ok());
}
