//! Read-only snapshot handed to the renderer.

use super::players::PlayerNames;
use super::status::{SessionPhase, StatusLine};
use super::{Board, HistoryEntry, Position};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one frame.
///
/// Built fresh from the session on every read, so it never goes stale.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new, derive_getters::Getters,
)]
pub struct SessionView {
    /// Lifecycle phase.
    phase: SessionPhase,
    /// Displayed board.
    board: Board,
    /// Index of the displayed board in `history`.
    current_move: usize,
    /// Jump targets, oldest first.
    history: Vec<HistoryEntry>,
    /// Both player names.
    player_names: PlayerNames,
    /// Status line for the displayed board.
    status: StatusLine,
    /// Winning line on the displayed board, if any.
    winning_line: Option<[Position; 3]>,
}
