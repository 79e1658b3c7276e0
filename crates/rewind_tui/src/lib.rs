//! Rewind terminal front end.
//!
//! A thin presentation layer over [`rewind_tictactoe`]: it turns key presses
//! and script lines into intents, forwards them to a session, and paints
//! whatever view the session hands back.
//!
//! # Modes
//!
//! - **play**: interactive ratatui board with a navigable move list
//! - **script**: apply intents non-interactively and print the final view

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod script;
mod ui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, RewindConfig};

// Crate-level exports - Interactive mode
pub use app::{App, Focus};
pub use input::{Direction, KeyAction, map_key, move_cursor};
pub use ui::draw;

// Crate-level exports - Script mode
pub use script::{ScriptReport, load_script, render_text, run_script};
