//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are separated from board
//! storage and from the session so they can be tested on arbitrary boards,
//! including ones unreachable in legal play.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board into a terminal-state verdict.
///
/// The winner check runs first and is authoritative: a full board with a
/// completed line reports the winner, never a draw.
#[instrument(level = "debug", skip(board), fields(occupied = board.occupied_count()))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        return Outcome::won(player, line);
    }
    if is_full(board) {
        return Outcome::draw();
    }
    Outcome::ongoing()
}
