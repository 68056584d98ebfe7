//! Contract-based validation for board placement.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(board, move)} apply {Q(before, after)}`.

use super::action::{Move, MoveError};
use super::rules::calculate_winner;
use super::{Board, Cell};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for a transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), MoveError>;
}

/// Precondition: no line is complete yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails with [`MoveError::GameAlreadyDecided`] if the board has a winner.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match calculate_winner(board) {
            Some(_) => Err(MoveError::GameAlreadyDecided),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if the target cell holds a mark.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if board.is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - No winner yet (checked first)
/// - Target cell is empty
///
/// Postconditions:
/// - Exactly one cell changed
/// - That cell now holds the placed mark
pub struct PlacementContract;

impl Contract<Board, Move> for PlacementContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        GameUndecided::check(board)?;
        CellIsEmpty::check(action, board)
    }

    fn post(before: &Board, action: &Move, after: &Board) -> Result<(), MoveError> {
        let changed = before
            .cells()
            .iter()
            .zip(after.cells())
            .filter(|(b, a)| b != a)
            .count();
        if changed != 1 {
            warn!(changed, "Placement changed more than one cell");
            return Err(MoveError::ContractViolation(format!(
                "expected one changed cell, found {}",
                changed
            )));
        }
        if after.get(action.position) != Cell::Occupied(action.mark) {
            warn!(%action, "Placed mark missing after move");
            return Err(MoveError::ContractViolation(format!(
                "{} not found on board",
                action
            )));
        }
        Ok(())
    }
}
