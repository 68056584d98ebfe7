//! Rewind tic-tac-toe - rules engine and player session
//!
//! Two players share one board. Every move is kept as a board snapshot so
//! the game can be rewound to any earlier move and continued from there.
//!
//! # Architecture
//!
//! - **Engine**: pure board transitions ([`apply_move`], [`calculate_winner`],
//!   [`is_board_full`], [`is_terminal`])
//! - **History**: snapshot list with forward truncation ([`History`])
//! - **Session**: naming, start, moves, time travel and resets
//!   ([`SessionController`])
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{PlayerSlot, Position, SessionController};
//!
//! let mut session = SessionController::new();
//! session.set_player_name(PlayerSlot::Player1, "Alice");
//! session.set_player_name(PlayerSlot::Player2, "Bob");
//! session.start_game();
//!
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     session.play_cell(pos);
//! }
//! assert_eq!(session.status_line().to_string(), "Alice has won");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod history;
mod players;
mod position;
mod rules;
mod session;
mod status;
mod types;
mod view;

pub mod invariants;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, GameUndecided, PlacementContract};
pub use engine::{apply_move, is_terminal};
pub use history::{History, HistoryEntry, HistoryError};
pub use players::{PlayerNames, PlayerSlot};
pub use position::Position;
pub use rules::{WINNING_LINES, calculate_winner, is_board_full, winning_line};
pub use session::SessionController;
pub use status::{SessionPhase, StatusLine};
pub use types::{Board, Cell, Mark};
pub use view::SessionView;
