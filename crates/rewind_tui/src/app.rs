//! Application state and logic.

use crate::input::{Direction, KeyAction, move_cursor};
use rewind_tictactoe::{GameSession, GameView, Intent, Position};
use tracing::{debug, info, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The grid; arrows move the cursor.
    #[default]
    Board,
    /// The move list; arrows move the selection.
    History,
}

/// Main application state.
///
/// Owns the session and the purely visual state around it (cursor, focus,
/// list selection, last rejection message).
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh session.
    #[instrument]
    pub fn new(ascending: bool) -> Self {
        Self {
            session: GameSession::with_ascending(ascending),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current view of the session.
    pub fn view(&self) -> GameView {
        self.session.current_view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the highlighted row in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Message from the last rejected intent, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key action.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Navigate(direction) => self.navigate(direction),
            KeyAction::Select => match self.focus {
                Focus::Board => self.forward(Intent::SelectCell {
                    index: self.cursor.to_index(),
                }),
                Focus::History => {
                    if let Some(entry) = self.view().moves().get(self.selected) {
                        let step = entry.step();
                        self.forward(Intent::JumpTo { step });
                    }
                }
            },
            KeyAction::PlaceAt(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.forward(Intent::SelectCell { index });
            }
            KeyAction::ToggleOrder => {
                self.forward(Intent::ToggleOrder);
                self.selected = self.last_row().saturating_sub(self.selected);
            }
            KeyAction::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.select_active();
            }
            KeyAction::Restart => self.restart(),
            KeyAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Starts a new game, keeping the display order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session = GameSession::with_ascending(self.session.is_ascending());
        self.cursor = Position::Center;
        self.message = None;
        self.select_active();
    }

    fn forward(&mut self, intent: Intent) {
        match self.session.dispatch(intent) {
            Ok(()) => {
                debug!(%intent, "Intent applied");
                self.message = None;
                if matches!(intent, Intent::SelectCell { .. }) {
                    self.select_active();
                }
            }
            Err(e) => {
                warn!(%intent, error = %e, "Intent rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                self.selected = match direction {
                    Direction::Up | Direction::Left => self.selected.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected + 1).min(self.last_row()),
                };
            }
        }
    }

    fn select_active(&mut self) {
        let view = self.view();
        self.selected = view
            .moves()
            .iter()
            .position(|entry| entry.is_active())
            .unwrap_or(0);
    }

    fn last_row(&self) -> usize {
        self.session.step_count() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Player;

    #[test]
    fn test_place_with_cursor() {
        let mut app = App::new(true);
        app.handle(KeyAction::Navigate(Direction::Up));
        app.handle(KeyAction::Select);
        assert_eq!(
            app.session().current().board().cell(Position::TopCenter).mark(),
            Some(Player::X)
        );
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_rejection_sets_message_and_keeps_state() {
        let mut app = App::new(true);
        app.handle(KeyAction::PlaceAt(4));
        app.handle(KeyAction::PlaceAt(4));
        assert_eq!(app.session().step_count(), 2);
        assert!(app.message().is_some_and(|m| m.contains("occupied")));
    }

    #[test]
    fn test_history_selection_jumps() {
        let mut app = App::new(true);
        app.handle(KeyAction::PlaceAt(0));
        app.handle(KeyAction::PlaceAt(4));
        app.handle(KeyAction::SwitchFocus);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 2);

        app.handle(KeyAction::Navigate(Direction::Up));
        app.handle(KeyAction::Navigate(Direction::Up));
        app.handle(KeyAction::Select);
        assert_eq!(app.session().active_step(), 0);
        assert_eq!(app.session().step_count(), 3);
    }

    #[test]
    fn test_toggle_keeps_selection_on_same_entry() {
        let mut app = App::new(true);
        app.handle(KeyAction::PlaceAt(0));
        app.handle(KeyAction::PlaceAt(4));
        app.handle(KeyAction::SwitchFocus);
        app.handle(KeyAction::Navigate(Direction::Up));
        let step = app.view().moves()[app.selected()].step();

        app.handle(KeyAction::ToggleOrder);
        assert!(!app.session().is_ascending());
        assert_eq!(app.view().moves()[app.selected()].step(), step);
    }

    #[test]
    fn test_restart_keeps_order() {
        let mut app = App::new(false);
        app.handle(KeyAction::PlaceAt(0));
        app.handle(KeyAction::Restart);
        assert_eq!(app.session().step_count(), 1);
        assert!(!app.session().is_ascending());
    }
}
