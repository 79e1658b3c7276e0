//! Non-interactive mode: apply intents and report the final view.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameSession, GameView, Intent};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Outcome of a script run.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptReport {
    /// Final projection of the session.
    pub view: GameView,
    /// Status line text.
    pub status: String,
    /// Order toggle label.
    pub order_label: String,
    /// Per-cell winning line flags.
    pub highlights: [bool; 9],
    /// Rejected intents with their reasons.
    pub rejected: Vec<String>,
}

/// Reads a JSON array of intents.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<Intent>> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read script {}", path.as_ref().display()))?;
    let intents: Vec<Intent> =
        serde_json::from_str(&content).context("Script must be a JSON array of intents")?;
    info!(count = intents.len(), "Script loaded");
    Ok(intents)
}

/// Applies intents in order to a fresh session.
///
/// Rejected intents are recorded and skipped, never fatal.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn run_script(intents: &[Intent], ascending: bool) -> ScriptReport {
    let mut session = GameSession::with_ascending(ascending);
    let mut rejected = Vec::new();

    for intent in intents {
        if let Err(e) = session.dispatch(*intent) {
            warn!(%intent, error = %e, "Skipping rejected intent");
            rejected.push(format!("{intent}: {e}"));
        }
    }

    let view = session.current_view();
    ScriptReport {
        status: view.status_text(),
        order_label: view.order_label().to_string(),
        highlights: view.highlights(),
        view,
        rejected,
    }
}

/// Plain-text rendering of a report.
///
/// Winning cells are wrapped in brackets and the active move is marked
/// with `>`.
pub fn render_text(report: &ScriptReport) -> String {
    let view = &report.view;
    let mut out = String::new();

    for (row, chunk) in view.board().cells().chunks(3).enumerate() {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let symbol = cell.mark().map_or(" ".to_string(), |m| m.to_string());
                if report.highlights[row * 3 + col] {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }

    out.push('\n');
    let _ = writeln!(out, "{}", report.status);
    let _ = writeln!(out, "{}", report.order_label);
    for entry in view.moves() {
        let marker = if entry.is_active() { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {}", entry.label());
    }
    for rejection in &report.rejected {
        let _ = writeln!(out, "rejected: {rejection}");
    }
    out
}
