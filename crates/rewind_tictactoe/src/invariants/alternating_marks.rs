//! Alternating marks invariant: X and O take turns, X first.

use super::Invariant;
use crate::{Cell, GameSession, Player};

/// Invariant: the mark placed at step k belongs to the side that moved into k.
///
/// Odd steps carry X, even steps carry O.
pub struct AlternatingMarksInvariant;

impl Invariant<GameSession> for AlternatingMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| match (snapshot.last_move(), Player::moved_into(step)) {
                (Some(pos), Some(mover)) => snapshot.board().cell(*pos) == Cell::Marked(mover),
                _ => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate, X moving first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Snapshot};

    #[test]
    fn test_replayed_game_holds() {
        let session = GameSession::from_moves(&[0, 3, 1, 4]).unwrap();
        assert!(AlternatingMarksInvariant::holds(&session));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = GameSession::from_moves(&[0, 3]).unwrap();
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::MiddleLeft, Player::X);
        session.history[2] = Snapshot::after_move(board, Position::MiddleLeft);
        assert!(!AlternatingMarksInvariant::holds(&session));
    }
}
