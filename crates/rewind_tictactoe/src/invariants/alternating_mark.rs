//! Alternating mark invariant: X and O take turns, X first.

use super::Invariant;
use crate::{History, Mark};

/// Invariant: snapshot `i` was produced by the mark whose turn it was at `i - 1`.
///
/// Odd snapshots add an X, even ones an O.
pub struct AlternatingMarkInvariant;

impl Invariant<History> for AlternatingMarkInvariant {
    fn holds(history: &History) -> bool {
        (1..history.len()).all(|index| {
            history
                .move_at(index)
                .is_some_and(|mov| mov.mark == Mark::for_move(index - 1))
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
