//! Board transitions.
//!
//! The engine is a handful of free functions over [`Board`] values. It holds
//! no state: the session owns the history and calls in here for every move.

use super::action::{Move, MoveError};
use super::contracts::{Contract, PlacementContract};
use super::rules::{calculate_winner, is_board_full};
use super::{Board, Cell, Mark, Position};
use tracing::{debug, instrument};

/// Places `mark` at `position`, returning the resulting board.
///
/// The input board is never modified. Fails with
/// [`MoveError::GameAlreadyDecided`] if the board already has a winner, or
/// [`MoveError::CellOccupied`] if the target cell is taken.
#[instrument]
pub fn apply_move(board: &Board, position: Position, mark: Mark) -> Result<Board, MoveError> {
    let action = Move::new(mark, position);
    PlacementContract::pre(board, &action)?;

    let next = board.with(position, Cell::Occupied(mark));

    #[cfg(debug_assertions)]
    PlacementContract::post(board, &action, &next)?;

    debug!(%action, "Move applied");
    Ok(next)
}

/// True when the board has a winner or no empty cell remains.
#[instrument]
pub fn is_terminal(board: &Board) -> bool {
    calculate_winner(board).is_some() || is_board_full(board)
}
