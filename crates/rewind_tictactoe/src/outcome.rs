//! Terminal-state verdicts derived from a board.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Three positions forming a completed line.
pub type WinLine = [Position; 3];

/// Verdict for a single board.
///
/// Never stored; recomputed from a board on demand. At most one of
/// "winner present" and "is draw" holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Outcome {
    winner: Option<Player>,
    win_line: Option<WinLine>,
    is_draw: bool,
}

impl Outcome {
    /// Game still in progress.
    pub fn ongoing() -> Self {
        Self::default()
    }

    /// `player` completed `line`.
    pub fn won(player: Player, line: WinLine) -> Self {
        Self {
            winner: Some(player),
            win_line: Some(line),
            is_draw: false,
        }
    }

    /// Full board, no line.
    pub fn draw() -> Self {
        Self {
            winner: None,
            win_line: None,
            is_draw: true,
        }
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The completed line, if any.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    /// True when the board is full with no winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// True when no further moves are possible.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// True iff a win line exists and runs through `index`.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.win_line
            .is_some_and(|line| line.iter().any(|pos| pos.to_index() == index))
    }

    /// Status for a game whose next mover would be `next`.
    pub fn status(&self, next: Player) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(player), _) => GameStatus::Won(player),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress { next },
        }
    }
}

/// Current status of the game, as shown on the status line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {next}")]
    InProgress {
        /// Side to move.
        next: Player,
    },
    /// Game ended in a win.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Game ended in a draw.
    #[display("Game ends in a draw")]
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let line = [Position::TopLeft, Position::Center, Position::BottomRight];
        assert_eq!(
            Outcome::won(Player::O, line).status(Player::X).to_string(),
            "Winner: O"
        );
        assert_eq!(Outcome::draw().status(Player::O).to_string(), "Game ends in a draw");
        assert_eq!(Outcome::ongoing().status(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_highlight_follows_win_line() {
        let outcome = Outcome::won(
            Player::X,
            [Position::TopRight, Position::Center, Position::BottomLeft],
        );
        let lit: Vec<usize> = (0..9).filter(|i| outcome.is_highlighted(*i)).collect();
        assert_eq!(lit, vec![2, 4, 6]);
        assert!(!Outcome::draw().is_highlighted(4));
    }
}
