//! Empty start invariant: snapshot 0 is the empty board.

use super::Invariant;
use crate::{Board, History};

/// Invariant: the first snapshot is the empty board.
pub struct EmptyStartInvariant;

impl Invariant<History> for EmptyStartInvariant {
    fn holds(history: &History) -> bool {
        history.get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(EmptyStartInvariant::holds(&History::new()));
    }

    #[test]
    fn test_marked_start_violates() {
        let start = Board::new().with(Position::Center, Cell::Occupied(Mark::X));
        assert!(!EmptyStartInvariant::holds(&History::from_boards(vec![start])));
    }

    #[test]
    fn test_missing_start_violates() {
        assert!(!EmptyStartInvariant::holds(&History::from_boards(vec![])));
    }
}
