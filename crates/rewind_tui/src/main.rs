//! Rewind - terminal tic-tac-toe with a time-travel move history.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tui::{App, Cli, Command, RewindConfig, draw, load_script, map_key, render_text, run_script};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { descending } => run_play(config.with_descending(descending)),
        Command::Script {
            intents,
            file,
            json,
            descending,
        } => run_script_mode(config.with_descending(descending), intents, file, json),
    }
}

fn env_filter(config: &RewindConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the interactive terminal UI
fn run_play(config: RewindConfig) -> Result<()> {
    // Log to a file so output does not tear the alternate screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(ascending = *config.ascending(), "Starting rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(*config.ascending());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, block for a key, forward it; repeat until quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = map_key(key.code) {
                debug!(?action, "Key action");
                app.handle(action);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Apply intents from a file and/or the command line, print the result
fn run_script_mode(
    config: RewindConfig,
    intents: Vec<rewind_tictactoe::Intent>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(io::stderr)
        .init();

    let mut all = match file {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    all.extend(intents);
    info!(count = all.len(), "Running script");

    let report = run_script(&all, *config.ascending());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
