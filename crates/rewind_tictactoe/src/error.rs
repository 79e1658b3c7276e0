//! Error types for the session core.
//!
//! Every failure here is local and recoverable: the session is left exactly
//! as it was and the caller is free to ignore the error.

use crate::position::Position;
use derive_more::{Display, Error};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RejectReason {
    /// The index does not name a cell.
    #[display("index {_0} is outside the board (0-8)")]
    OutOfBounds(usize),
    /// The active board already has a winner.
    #[display("game is already decided")]
    GameOver,
    /// The target cell holds a mark.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
}

/// Errors returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// An illegal move was attempted.
    #[display("move at index {index} rejected: {reason}")]
    MoveRejected {
        /// Requested cell index.
        index: usize,
        /// Why the move was refused.
        reason: RejectReason,
    },
    /// A history jump fell outside the recorded steps.
    #[display("step {step} is outside the history (length {len})")]
    InvalidStep {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl SessionError {
    /// The move rejection reason, if this is a rejected move.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            SessionError::MoveRejected { reason, .. } => Some(*reason),
            SessionError::InvalidStep { .. } => None,
        }
    }
}

/// Errors from parsing a textual board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A symbol other than a mark, an empty marker or a separator.
    #[display("invalid character '{character}' at offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset in the input.
        offset: usize,
    },
    /// Not exactly nine cells.
    #[display("expected 9 cells, found {found}")]
    WrongLength {
        /// Cells read before giving up.
        found: usize,
    },
}

/// Errors from parsing a textual intent such as `move 4`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum IntentParseError {
    /// Blank input.
    #[display("empty intent")]
    Empty,
    /// First word is not a known intent.
    #[display("unknown intent '{verb}' (expected move, jump or toggle)")]
    UnknownVerb {
        /// The unrecognised word.
        verb: String,
    },
    /// A numeric argument was required.
    #[display("intent '{verb}' needs a number")]
    MissingArgument {
        /// The intent word.
        verb: String,
    },
    /// The argument is not a non-negative integer.
    #[display("intent '{verb}' expects a number, got '{value}'")]
    InvalidArgument {
        /// The intent word.
        verb: String,
        /// The rejected argument.
        value: String,
    },
    /// Words after a complete intent.
    #[display("unexpected trailing input '{rest}'")]
    TrailingInput {
        /// Everything after the intent.
        rest: String,
    },
}
