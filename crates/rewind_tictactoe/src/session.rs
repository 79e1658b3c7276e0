//! Game session: history, active step and display order.

use crate::error::{RejectReason, SessionError};
use crate::intent::Intent;
use crate::position::Position;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::Player;
use crate::view::{GameView, MoveEntry};
use tracing::{debug, info, instrument, warn};

/// A single game with a branching, navigable history.
///
/// The session is owned by one caller and mutated only through
/// [`apply_move`](Self::apply_move), [`jump_to`](Self::jump_to) and
/// [`toggle_order`](Self::toggle_order). The side to move is derived from
/// the active step's parity and is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) active_step: usize,
    pub(crate) ascending: bool,
}

impl GameSession {
    /// Creates a session at the initial empty board, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_ascending(true)
    }

    /// Creates a session with the given move list order.
    #[instrument]
    pub fn with_ascending(ascending: bool) -> Self {
        debug!("Creating new game session");
        Self {
            history: vec![Snapshot::initial()],
            active_step: 0,
            ascending,
        }
    }

    /// Replays cell indices from a fresh session.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; moves before it are not kept.
    #[instrument]
    pub fn from_moves(indices: &[usize]) -> Result<Self, SessionError> {
        let mut session = Self::new();
        for &index in indices {
            session.apply_move(index)?;
        }
        Ok(session)
    }

    /// Places the side-to-move's mark at `index`.
    ///
    /// Any snapshots after the active step are discarded first, so a move
    /// made from a rewound position starts a new branch.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MoveRejected`] without touching state when the
    /// index is outside 0-8, the active board already has a winner, or the
    /// cell is occupied.
    #[instrument(skip(self), fields(active_step = self.active_step))]
    pub fn apply_move(&mut self, index: usize) -> Result<Position, SessionError> {
        let reject = |reason: RejectReason| {
            warn!(index, %reason, "Move rejected");
            SessionError::MoveRejected { index, reason }
        };

        let pos = Position::from_index(index).ok_or_else(|| reject(RejectReason::OutOfBounds(index)))?;
        let current = self.current();
        if rules::check_winner(current.board()).is_some() {
            return Err(reject(RejectReason::GameOver));
        }
        if !current.board().is_empty(pos) {
            return Err(reject(RejectReason::SquareOccupied(pos)));
        }

        let player = self.side_to_move();
        let board = current.board().with_mark(pos, player);

        let discarded = self.history.len() - (self.active_step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.history.truncate(self.active_step + 1);
        self.history.push(Snapshot::after_move(board, pos));
        self.active_step = self.history.len() - 1;

        info!(%player, position = %pos, step = self.active_step, "Move applied");

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, SessionInvariants};
            let checked = SessionInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "Session invariants violated: {checked:?}");
        }

        Ok(pos)
    }

    /// Moves the active step to `step` without modifying history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidStep`] when `step` is not a recorded step.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), SessionError> {
        if step >= self.history.len() {
            warn!(step, "Jump target outside history");
            return Err(SessionError::InvalidStep {
                step,
                len: self.history.len(),
            });
        }
        self.active_step = step;
        debug!(step, to_move = %self.side_to_move(), "Jumped");
        Ok(())
    }

    /// Flips the move list display order.
    #[instrument(skip(self), fields(ascending = self.ascending))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Routes an intent to the matching operation.
    ///
    /// # Errors
    ///
    /// Propagates the rejection from [`apply_move`](Self::apply_move) or
    /// [`jump_to`](Self::jump_to).
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), SessionError> {
        match intent {
            Intent::SelectCell { index } => self.apply_move(index).map(|_| ()),
            Intent::JumpTo { step } => self.jump_to(step),
            Intent::ToggleOrder => {
                self.toggle_order();
                Ok(())
            }
        }
    }

    /// Projects the active snapshot for rendering.
    #[instrument(skip(self), fields(active_step = self.active_step))]
    pub fn current_view(&self) -> GameView {
        let current = self.current();
        let outcome = rules::evaluate(current.board());

        let mut moves: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry::describe(step, snapshot, step == self.active_step))
            .collect();
        if !self.ascending {
            moves.reverse();
        }

        GameView::new(
            *current.board(),
            outcome,
            self.side_to_move(),
            self.active_step,
            moves,
            self.ascending,
        )
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// The snapshot at the active step.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.active_step]
    }

    /// Index of the active snapshot.
    pub fn active_step(&self) -> usize {
        self.active_step
    }

    /// Number of recorded snapshots, including the initial one.
    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    /// Side to move at the active step.
    pub fn side_to_move(&self) -> Player {
        Player::to_move_at(self.active_step)
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell};

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.step_count(), 1);
        assert_eq!(session.active_step(), 0);
        assert_eq!(session.side_to_move(), Player::X);
        assert!(session.is_ascending());
        assert_eq!(*session.current(), Snapshot::initial());
    }

    #[test]
    fn test_apply_move_appends_snapshot() {
        let mut session = GameSession::new();
        assert_eq!(session.apply_move(4), Ok(Position::Center));
        assert_eq!(session.step_count(), 2);
        assert_eq!(session.current().board().cell(Position::Center), Cell::Marked(Player::X));
        assert_eq!(*session.current().last_move(), Some(Position::Center));
        assert_eq!(session.side_to_move(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut session = GameSession::new();
        let before = session.clone();
        assert_eq!(
            session.apply_move(9),
            Err(SessionError::MoveRejected {
                index: 9,
                reason: RejectReason::OutOfBounds(9),
            })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_move_after_draw_rejected_as_occupied() {
        // X O X / X O O / O X X
        let mut session = GameSession::from_moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(*session.current().board(), "XOX/XOO/OXX".parse::<Board>().unwrap());
        let err = session.apply_move(4).unwrap_err();
        assert_eq!(err.reject_reason(), Some(RejectReason::SquareOccupied(Position::Center)));
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut session = GameSession::new();
        session.dispatch(Intent::SelectCell { index: 0 }).unwrap();
        session.dispatch(Intent::ToggleOrder).unwrap();
        session.dispatch(Intent::JumpTo { step: 0 }).unwrap();
        assert_eq!(session.step_count(), 2);
        assert_eq!(session.active_step(), 0);
        assert!(!session.is_ascending());
        assert!(session.dispatch(Intent::JumpTo { step: 5 }).is_err());
    }

    #[test]
    fn test_from_moves_stops_at_rejection() {
        let err = GameSession::from_moves(&[0, 0]).unwrap_err();
        assert_eq!(err.reject_reason(), Some(RejectReason::SquareOccupied(Position::TopLeft)));
    }
}
