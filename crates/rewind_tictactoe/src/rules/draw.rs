//! Full-board detection for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// A full board with no winner is a draw.
#[instrument]
pub fn is_board_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
