//! Scenario tests for the replay engine.

use threerow::{Game, Outcome, Player, Position, Square};

/// Plays a sequence of positions from a fresh game.
fn play_all(moves: &[usize]) -> Game {
    moves.iter().fold(Game::new(), |game, &index| {
        game.play(Position::from_index(index).expect("test index in range"))
    })
}

// X O X
// X O O
// O X X
const DRAW_SEQUENCE: [usize; 9] = [0, 4, 8, 1, 7, 6, 2, 5, 3];

#[test]
fn test_new_game_starts_empty() {
    let game = Game::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.pointer(), 0);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.status_line(), "Next player: X");
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new();
    for (ply, &index) in [4usize, 0, 8, 2].iter().enumerate() {
        assert_eq!(
            game.to_move(),
            if ply % 2 == 0 { Player::X } else { Player::O }
        );
        game = game.play(Position::from_index(index).unwrap());
    }
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status_line(), "Next player: X");
}

#[test]
fn test_occupied_square_is_ignored() {
    let game = Game::new().play(Position::Center);
    let after = game.play(Position::Center);
    assert_eq!(after, game);
    assert_eq!(after.history().len(), 2);
}

#[test]
fn test_move_after_win_is_ignored() {
    // X takes the top row.
    let game = play_all(&[0, 3, 1, 4, 2]);
    assert_eq!(game.outcome().winner(), Some(Player::X));

    let after = game.play(Position::BottomRight);
    assert_eq!(after, game);
}

#[test]
fn test_move_after_draw_is_ignored() {
    let game = play_all(&DRAW_SEQUENCE);
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.status_line(), "It's a draw!");

    let after = game.play(Position::Center);
    assert_eq!(after, game);
}

#[test]
fn test_jump_then_play_truncates_future() {
    let game = play_all(&[0, 4, 8]);
    assert_eq!(game.history().len(), 4);

    let branched = game.jump_to(1).play(Position::TopCenter);
    assert_eq!(branched.history().len(), 3);
    assert_eq!(branched.pointer(), 2);
    // Entry 2 is the newly played move, not the old one.
    assert_eq!(
        branched.history()[2].get(Position::TopCenter),
        Square::Occupied(Player::O)
    );
    assert!(branched.history()[2].is_empty(Position::BottomRight));
    assert_eq!(
        branched.locations(),
        &[Position::TopLeft, Position::TopCenter]
    );
}

#[test]
fn test_branch_location_diffs_against_displayed_snapshot() {
    // Jumping back and playing a different cell than the original ply must
    // record the new cell, not an artifact of the stale tail.
    let game = play_all(&[0, 1, 2]);
    let branched = game.jump_to(1).play(Position::MiddleRight);
    let coordinates: Vec<String> = branched
        .locations()
        .iter()
        .map(|pos| pos.coordinate())
        .collect();
    assert_eq!(coordinates, vec!["(1, 1)", "(2, 3)"]);
}

#[test]
fn test_jump_out_of_range_is_ignored() {
    let game = play_all(&[0, 4]);
    assert_eq!(game.jump_to(3), game);
    assert_eq!(game.jump_to(usize::MAX), game);
}

#[test]
fn test_jump_preserves_stale_locations() {
    let game = play_all(&[0, 4, 8]).jump_to(0);
    assert_eq!(game.locations().len(), 3);
}

#[test]
fn test_winning_move_from_the_past_is_playable() {
    // A decided game jumped back to an earlier ply is in progress again.
    let game = play_all(&[0, 3, 1, 4, 2]);
    let revisited = game.jump_to(4);
    assert_eq!(revisited.outcome(), Outcome::InProgress);

    let branched = revisited.play(Position::BottomRight);
    assert_eq!(branched.history().len(), 6);
}

#[test]
fn test_x_wins_major_diagonal() {
    // X: 0, 4, 8; O: 1, 2.
    let game = play_all(&[0, 1, 4, 2, 8]);

    let Outcome::Won(win) = game.outcome() else {
        panic!("expected a win, got {:?}", game.outcome());
    };
    assert_eq!(win.player, Player::X);
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
    assert_eq!(game.status_line(), "Winner: X");

    // The fifth ply was index 8: row 3, column 3.
    assert_eq!(game.locations()[4].coordinate(), "(3, 3)");
}

#[test]
fn test_sort_toggle_round_trips() {
    for length in 0..6 {
        let game = play_all(&DRAW_SEQUENCE[..length]);
        let toggled = game.toggle_sort_order();
        if length > 0 {
            assert_ne!(toggled.moves(), game.moves());
        }
        assert_eq!(toggled.toggle_sort_order(), game);
        assert_eq!(toggled.toggle_sort_order().moves(), game.moves());
    }
}

#[test]
fn test_sort_toggle_only_touches_presentation() {
    let game = play_all(&[0, 4]);
    let toggled = game.toggle_sort_order();
    assert_eq!(toggled.history(), game.history());
    assert_eq!(toggled.pointer(), game.pointer());
    assert_eq!(toggled.outcome(), game.outcome());
}

#[test]
fn test_move_list_entries() {
    let game = play_all(&[0, 4]);
    let entries = game.moves();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].number, 0);
    assert_eq!(entries[0].location, None);
    assert_eq!(entries[1].location, Some(Position::TopLeft));
    assert_eq!(entries[2].location, Some(Position::Center));

    let reversed = game.toggle_sort_order().moves();
    assert_eq!(reversed[0].number, 2);
    assert_eq!(reversed[2].number, 0);
}

#[test]
fn test_state_survives_serialization() {
    let game = play_all(&[0, 4, 8]).jump_to(1).toggle_sort_order();
    let json = serde_json::to_string(&game).expect("serialize");
    let restored: Game = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
}
