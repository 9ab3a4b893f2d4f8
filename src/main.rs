//! Got It First - terminal front-end for scheduling tutoring sessions
//!
//! Entry point: parses arguments, sets up logging and the terminal, then
//! runs the draw/input loop until the user quits.

mod app;
mod cli;
mod config;
mod error;
mod models;
mod terminal;
mod theme;
mod ui;
mod utils;
mod watcher;

use std::fs::{self, OpenOptions};
use std::io::{self, stdout};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{parse_args, CliConfig};
use error::AppError;
use models::Catalog;
use terminal::TerminalGuard;

fn main() -> Result<()> {
    let config = parse_args().map_err(AppError::from)?;
    init_logging(&config)?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path).map_err(AppError::from)?,
        None => Catalog::builtin().map_err(AppError::from)?,
    };
    tracing::info!(
        catalog = ?config.catalog_path,
        reentry = config.reentry.label(),
        "starting"
    );

    let mut app = App::new(catalog, &config);

    // Keep the watcher alive for the whole session
    let _watcher = match (&config.catalog_path, config.watch_catalog) {
        (Some(path), true) => {
            watcher::setup_catalog_watcher(path.clone(), app.catalog_needs_reload.clone())
        }
        _ => None,
    };

    // Setup terminal; the guard undoes it on every exit path
    let mut guard = TerminalGuard::enter().map_err(AppError::from)?;
    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(AppError::from)
        .and_then(|mut terminal| run(&mut terminal, &mut app, &config));

    // Restore terminal
    let restored = guard.restore();

    if let Err(ref e) = result {
        tracing::error!(error = %e, "exiting after terminal error");
    }
    result?;
    restored.map_err(AppError::from)?;
    Ok(())
}

/// Send tracing output to the log file; the terminal belongs to the UI
fn init_logging(config: &CliConfig) -> Result<(), AppError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AppError::Log {
            path: path.clone(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::Log {
            path: path.clone(),
            source,
        })?;

    let default_level = if config.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &CliConfig,
) -> Result<(), AppError> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        app.reload_catalog_if_needed();

        terminal.draw(|frame| ui::render(frame, &app.view()))?;

        // Handle input
        let timeout = config.tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= config.tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    tracing::info!("quit");
    Ok(())
}
