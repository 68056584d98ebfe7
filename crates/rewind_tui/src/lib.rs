//! Terminal UI for rewind tic-tac-toe.
//!
//! The TUI is a rendering collaborator for
//! [`SessionController`](rewind_tictactoe::SessionController): it draws a
//! [`SessionView`](rewind_tictactoe::SessionView) every frame and turns key
//! presses into session events.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::{App, Transition};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::move_cursor;
pub use terminal::{TerminalGuard, install_panic_hook};
pub use ui::draw;
