//! Display-agnostic projection of a session.

use crate::outcome::{GameStatus, Outcome};
use crate::position::Coordinate;
use crate::snapshot::Snapshot;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    step: usize,
    label: String,
    mark: Option<Player>,
    location: Option<Coordinate>,
    is_active: bool,
}

impl MoveEntry {
    /// Describes history step `step`.
    ///
    /// Step 0 reads "Game start"; later steps name the side that moved into
    /// the step and where, e.g. "Move #3: X @ (2, 2)".
    pub fn describe(step: usize, snapshot: &Snapshot, is_active: bool) -> Self {
        let mark = Player::moved_into(step);
        let location = snapshot.location();
        let label = match (mark, location) {
            (Some(mark), Some(location)) => format!("Move #{step}: {mark} @ {location}"),
            _ => "Game start".to_string(),
        };
        Self {
            step,
            label,
            mark,
            location,
            is_active,
        }
    }

    /// History step this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Text for the entry.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Side that moved into this step; `None` for step 0.
    pub fn mark(&self) -> Option<Player> {
        self.mark
    }

    /// Where that move was played.
    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    /// True for the step currently displayed.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Everything a renderer needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    board: Board,
    outcome: Outcome,
    side_to_move: Player,
    active_step: usize,
    moves: Vec<MoveEntry>,
    ascending: bool,
}

impl GameView {
    pub(crate) fn new(
        board: Board,
        outcome: Outcome,
        side_to_move: Player,
        active_step: usize,
        moves: Vec<MoveEntry>,
        ascending: bool,
    ) -> Self {
        Self {
            board,
            outcome,
            side_to_move,
            active_step,
            moves,
            ascending,
        }
    }

    /// Board at the active step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Verdict for that board.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Side to move at the active step.
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// The active step.
    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// Move list in display order.
    pub fn moves(&self) -> &[MoveEntry] {
        &self.moves
    }

    /// Whether the move list is oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Status derived from the outcome.
    pub fn status(&self) -> GameStatus {
        self.outcome.status(self.side_to_move)
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Label for the order toggle control.
    pub fn order_label(&self) -> &'static str {
        if self.ascending { "Order ^" } else { "Order v" }
    }

    /// True iff a winning line exists and contains `index`.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.outcome.is_highlighted(index)
    }

    /// Highlight flag for every cell.
    pub fn highlights(&self) -> [bool; 9] {
        std::array::from_fn(|index| self.is_highlighted(index))
    }
}
