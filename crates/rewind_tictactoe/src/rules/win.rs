//! Win detection logic for tic-tac-toe.

use crate::outcome::WinLine;
use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// The eight winning lines, in scan order.
pub const WINNING_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark and line of the first uniform, non-empty line in
/// [`WINNING_LINES`] order, `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let player = board.cell(a).mark()?;
        (board.cell(b) == board.cell(a) && board.cell(c) == board.cell(a)).then_some((player, [a, b, c]))
    })
}
