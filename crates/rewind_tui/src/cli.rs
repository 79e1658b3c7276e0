//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Intent;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Show the move list newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply intents without a terminal UI and print the final view
    Script {
        /// Intents such as "move 4", "jump 0" or "toggle", applied after any file
        intents: Vec<Intent>,

        /// JSON file holding an array of intents
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the final view as JSON
        #[arg(long)]
        json: bool,

        /// Show the move list newest first
        #[arg(long)]
        descending: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_intents() {
        let cli = Cli::parse_from(["rewind", "script", "move 4", "jump 0", "--json"]);
        match cli.command {
            Command::Script { intents, json, file, .. } => {
                assert_eq!(
                    intents,
                    vec![Intent::SelectCell { index: 4 }, Intent::JumpTo { step: 0 }]
                );
                assert!(json);
                assert!(file.is_none());
            }
            Command::Play { .. } => panic!("expected script command"),
        }
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
    }

    #[test]
    fn test_rejects_malformed_intent() {
        assert!(Cli::try_parse_from(["rewind", "script", "undo"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["rewind", "play", "--config", "alt.toml", "--descending"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(matches!(cli.command, Command::Play { descending: true }));
    }
}
