//! Single-cell delta invariant: each step changes exactly the cell it names.

use super::Invariant;
use crate::GameSession;

/// Invariant: for k >= 1, history[k] differs from history[k-1] in exactly
/// one cell, and that cell is history[k]'s last move.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameSession> for SingleCellDeltaInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            match after.last_move() {
                Some(pos) => after.board().diff(before.board()) == vec![*pos],
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step changes exactly the cell of its move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Snapshot};

    #[test]
    fn test_replayed_game_holds() {
        let session = GameSession::from_moves(&[4, 0, 8, 2, 1]).unwrap();
        assert!(SingleCellDeltaInvariant::holds(&session));
    }

    #[test]
    fn test_two_cell_jump_violates() {
        let mut session = GameSession::from_moves(&[4]).unwrap();
        let corrupted = Board::new()
            .with_mark(Position::Center, crate::Player::X)
            .with_mark(Position::TopLeft, crate::Player::O);
        session.history[1] = Snapshot::after_move(corrupted, Position::Center);
        assert!(!SingleCellDeltaInvariant::holds(&session));
    }

    #[test]
    fn test_missing_last_move_violates() {
        let mut session = GameSession::from_moves(&[4]).unwrap();
        let board = *session.history()[1].board();
        session.history[1] = Snapshot::new(board, None);
        assert!(!SingleCellDeltaInvariant::holds(&session));
    }
}
