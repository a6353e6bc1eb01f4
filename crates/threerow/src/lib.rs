//! Three-in-a-row game engine with move-history replay.
//!
//! The engine keeps every board snapshot ever produced, a pointer into that
//! history, and the coordinate of each ply. Callers submit moves and jumps;
//! every update is pure and returns the next state, so change detection is
//! plain equality and a rejected interaction is observable as `old == new`.
//!
//! # Example
//!
//! ```
//! use threerow::{Game, Outcome, Player, Position};
//!
//! let game = Game::new()
//!     .play(Position::TopLeft)
//!     .play(Position::Center)
//!     .play(Position::TopCenter);
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//!
//! // Revisit the opening; history is untouched.
//! let game = game.jump_to(1);
//! assert_eq!(game.board().count(Player::O), 0);
//! assert_eq!(game.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use game::{Game, MoveEntry};
pub use position::Position;
pub use rules::{Outcome, WinLine, check_winner, evaluate, is_full};
pub use types::{Board, Player, Square};
