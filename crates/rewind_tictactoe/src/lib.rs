//! Rewind tic-tac-toe - pure game logic with a time-travel history.
//!
//! The crate is the state core of a 3x3 game. A presentation layer forwards
//! user intents and re-renders from the view the session returns.
//!
//! # Architecture
//!
//! - **Rules**: the outcome evaluator, a pure function from a board to a verdict
//! - **Session**: move history, active step, display order preference
//! - **Intents**: first-class values for every inbound user request
//! - **Invariants**: checkable properties of a session's history
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Player};
//!
//! let mut session = GameSession::new();
//! session.apply_move(4).unwrap();
//! assert_eq!(session.side_to_move(), Player::O);
//!
//! session.jump_to(0).unwrap();
//! let view = session.current_view();
//! assert_eq!(view.status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod intent;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;
mod view;

// Crate-level exports - Board types
pub use position::{Coordinate, Position};
pub use types::{Board, Cell, Player};

// Crate-level exports - Outcome evaluation
pub use outcome::{GameStatus, Outcome, WinLine};
pub use rules::evaluate;

// Crate-level exports - Session management
pub use intent::Intent;
pub use session::GameSession;
pub use snapshot::Snapshot;
pub use view::{GameView, MoveEntry};

// Crate-level exports - Errors
pub use error::{BoardParseError, IntentParseError, RejectReason, SessionError};

/// Alias for clarity at the presentation boundary.
pub type Mark = Player;
