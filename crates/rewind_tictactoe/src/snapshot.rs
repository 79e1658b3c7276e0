//! History snapshots.

use crate::position::{Coordinate, Position};
use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Game state immediately after a move, or the initial empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Cell the move was played at; `None` for the initial snapshot.
    last_move: Option<Position>,
}

impl Snapshot {
    /// Creates a snapshot from its parts.
    pub fn new(board: Board, last_move: Option<Position>) -> Self {
        Self { board, last_move }
    }

    /// The empty board every history starts from.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Snapshot produced by a move at `pos`.
    pub fn after_move(board: Board, pos: Position) -> Self {
        Self {
            board,
            last_move: Some(pos),
        }
    }

    /// Display coordinate of the move that produced this snapshot.
    pub fn location(&self) -> Option<Coordinate> {
        self.last_move.map(Position::coordinate)
    }
}
