//! Single step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Cell, History};

/// Invariant: every snapshot keeps all earlier marks and adds exactly one.
///
/// Marks are never removed or overwritten, and no snapshot skips a move.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        history.boards().windows(2).all(|pair| {
            let mut added = 0;
            for (before, after) in pair[0].cells().iter().zip(pair[1].cells()) {
                match (before, after) {
                    (Cell::Empty, Cell::Occupied(_)) => added += 1,
                    (b, a) if b == a => {}
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
