//! Initial snapshot invariant: history starts from an empty board.

use super::Invariant;
use crate::{GameSession, Snapshot};

/// Invariant: history[0] is the empty board with no last move.
pub struct InitialSnapshotInvariant;

impl Invariant<GameSession> for InitialSnapshotInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().first() == Some(&Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty initial snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_holds() {
        assert!(InitialSnapshotInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut session = GameSession::new();
        session.history.clear();
        assert!(!InitialSnapshotInvariant::holds(&session));
    }
}
