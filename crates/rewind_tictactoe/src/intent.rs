//! First-class user intents.
//!
//! Intents are the only way a presentation layer talks to a session. They
//! can be parsed from text, loaded from a script and logged as values.

use crate::error::IntentParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user request forwarded to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// Place the side-to-move's mark at a cell index (0-8).
    #[display("move {index}")]
    SelectCell {
        /// Cell index.
        index: usize,
    },
    /// Travel to a history step.
    #[display("jump {step}")]
    JumpTo {
        /// History step.
        step: usize,
    },
    /// Flip the move list display order.
    #[display("toggle")]
    ToggleOrder,
}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// Parses `move N`, `jump N` or `toggle` (also `m N`, `j N`, `t`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(IntentParseError::Empty)?.to_lowercase();

        let intent = match verb.as_str() {
            "move" | "m" => Intent::SelectCell {
                index: numeric_argument(&verb, words.next())?,
            },
            "jump" | "j" => Intent::JumpTo {
                step: numeric_argument(&verb, words.next())?,
            },
            "toggle" | "t" => Intent::ToggleOrder,
            _ => return Err(IntentParseError::UnknownVerb { verb }),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(IntentParseError::TrailingInput {
                rest: rest.join(" "),
            });
        }
        Ok(intent)
    }
}

fn numeric_argument(verb: &str, word: Option<&str>) -> Result<usize, IntentParseError> {
    let value = word.ok_or_else(|| IntentParseError::MissingArgument {
        verb: verb.to_string(),
    })?;
    value.parse().map_err(|_| IntentParseError::InvalidArgument {
        verb: verb.to_string(),
        value: value.to_string(),
    })
}
