//! Rewind - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use rewind_tictactoe::PlayerSlot;
use rewind_tui::{App, Cli, TerminalGuard, Transition, TuiConfig, draw, install_panic_hook};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = cli.apply_overrides(TuiConfig::load(&cli.config)?);
    init_tracing(&config)?;

    info!("Starting rewind TUI");

    let mut app = App::new(*config.show_move_details());
    if let Some(name) = &cli.player_x {
        app.prefill_name(PlayerSlot::Player1, name);
    }
    if let Some(name) = &cli.player_o {
        app.prefill_name(PlayerSlot::Player2, name);
    }

    install_panic_hook();
    let mut guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, &mut app, config.poll_interval());

    guard.restore()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Exiting rewind TUI");
    res
}

/// Logs go to a file so they do not interfere with the TUI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draw, wait for a key, hand it to the app; until the app says quit.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, poll: Duration) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(poll)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == Transition::Quit {
                return Ok(());
            }
        }
    }
}
