//! Active step invariant: the pointer always names a recorded snapshot.

use super::Invariant;
use crate::GameSession;

/// Invariant: 0 <= active_step < len(history).
pub struct ActiveStepInBoundsInvariant;

impl Invariant<GameSession> for ActiveStepInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.active_step() < session.step_count()
    }

    fn description() -> &'static str {
        "Active step points inside the history"
    }
}
