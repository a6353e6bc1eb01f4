//! Game state with move-history replay.

use crate::position::Position;
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game with full move history.
///
/// The state is the ordered sequence of board snapshots, a pointer
/// selecting the displayed snapshot, the location of each ply, and the
/// presentation order of the move list. Whose turn it is and the outcome
/// are derived from the pointer and its snapshot, never stored.
///
/// Every update is pure: operations take `&self` and return the next
/// state. A rejected interaction (occupied square, decided game,
/// out-of-range jump) returns a state equal to the input, so callers
/// detect change with plain equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots; entry 0 is always the empty board.
    pub(crate) history: Vec<Board>,
    /// Index of the displayed snapshot, always in range.
    pub(crate) pointer: usize,
    /// Where each ply was played, lockstep with `history` (one entry per
    /// ply after the opening).
    pub(crate) locations: Vec<Position>,
    /// Move list presentation order: chronological when true.
    pub(crate) sorted: bool,
}

/// One row of the presented move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Move number (0 is the game start).
    pub number: usize,
    /// Where that ply was played; `None` for the game start.
    pub location: Option<Position>,
}

impl Game {
    /// Creates a new game: one empty snapshot, pointer at the start,
    /// chronological move list.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            pointer: 0,
            locations: Vec::new(),
            sorted: true,
        }
    }

    /// The snapshot at the pointer.
    pub fn board(&self) -> &Board {
        &self.history[self.pointer]
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Recorded ply locations, oldest first.
    pub fn locations(&self) -> &[Position] {
        &self.locations
    }

    /// Whether the move list is presented chronologically.
    pub fn sorted(&self) -> bool {
        self.sorted
    }

    /// The player to move at the pointer. X moves on even plies.
    pub fn to_move(&self) -> Player {
        if self.pointer % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Evaluates the snapshot at the pointer.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.board())
    }

    /// Plays a move at the given position.
    ///
    /// The move is ignored (the returned state equals `self`) when the
    /// square is occupied in the displayed snapshot or the game at the
    /// pointer is already decided. Otherwise the new snapshot replaces
    /// any history beyond the pointer, and the pointer advances to it.
    #[instrument(skip(self), fields(player = %self.to_move(), pointer = self.pointer))]
    pub fn play(&self, position: Position) -> Self {
        let board = self.board();
        if !board.is_empty(position) {
            debug!("square occupied, ignoring move");
            return self.clone();
        }
        if self.outcome().is_decided() {
            debug!("game already decided, ignoring move");
            return self.clone();
        }

        let next = board.with(position, Square::Occupied(self.to_move()));
        let mut history = self.history[..=self.pointer].to_vec();
        let mut locations = self.locations[..self.pointer].to_vec();
        history.push(next);
        locations.push(position);
        let pointer = history.len() - 1;
        Self {
            history,
            pointer,
            locations,
            sorted: self.sorted,
        }
    }

    /// Moves the pointer to the given history index.
    ///
    /// Out-of-range indices are ignored. History and recorded locations
    /// are never altered by a jump; entries beyond the pointer survive
    /// until the next [`Game::play`] overwrites them.
    #[instrument(skip(self))]
    pub fn jump_to(&self, index: usize) -> Self {
        if index >= self.history.len() {
            debug!("index out of range, ignoring jump");
            return self.clone();
        }
        Self {
            pointer: index,
            ..self.clone()
        }
    }

    /// Flips the presentation order of the move list.
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            sorted: !self.sorted,
            ..self.clone()
        }
    }

    /// Status text for the displayed snapshot.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::Won(win) => format!("Winner: {}", win.player),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// The move list in presentation order: one entry per snapshot, the
    /// opening first when sorted chronologically.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = (0..self.history.len())
            .map(|number| MoveEntry {
                number,
                location: number.checked_sub(1).map(|k| self.locations[k]),
            })
            .collect();
        if !self.sorted {
            entries.reverse();
        }
        entries
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
