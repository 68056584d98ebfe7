//! Board snapshots for time travel.

use super::action::Move;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::{Board, Position};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument, warn};

/// Ordered board snapshots.
///
/// Index 0 is always the empty board. Every later entry adds exactly one
/// mark to its predecessor. Deserialized histories are checked against
/// [`HistoryInvariants`] and rejected with [`HistoryError`] when they break
/// either rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Builds a history from raw snapshots without any checks.
    #[cfg(test)]
    pub(crate) fn from_boards(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// Number of snapshots, always at least 1.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Board {
        // Never empty: `new` seeds the first board and `record` only
        // truncates past an existing index.
        &self.boards[self.boards.len() - 1]
    }

    /// All snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Drops every snapshot after `after`, then appends `board`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, board), fields(len = self.boards.len()))]
    pub(crate) fn record(&mut self, after: usize, board: Board) -> usize {
        let dropped = self.boards.len().saturating_sub(after + 1);
        if dropped > 0 {
            debug!(after, dropped, "Discarding forward history");
        }
        self.boards.truncate(after + 1);
        self.boards.push(board);

        if cfg!(debug_assertions)
            && let Err(violations) = HistoryInvariants::check_all(self)
        {
            for v in &violations {
                warn!(violation = %v.description, "History invariant violated");
            }
            debug_assert!(violations.is_empty(), "history invariants violated");
        }

        self.boards.len() - 1
    }

    /// The move that produced snapshot `index`.
    ///
    /// `None` for index 0 and for out-of-range indices.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let prev = self.boards.get(index.checked_sub(1)?)?;
        let next = self.boards.get(index)?;
        Position::ALL.iter().find_map(|pos| {
            match (prev.get(*pos).mark(), next.get(*pos).mark()) {
                (None, Some(mark)) => Some(Move::new(mark, *pos)),
                _ => None,
            }
        })
    }

    /// Displayable entries, one per snapshot.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.boards
            .iter()
            .enumerate()
            .map(|(index, board)| HistoryEntry::new(index, HistoryEntry::label_for(index), *board))
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of [`History`] before validation.
#[derive(Deserialize)]
struct RawHistory {
    boards: Vec<Board>,
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawHistory::deserialize(deserializer)?;
        Self::try_from(raw.boards).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = HistoryError;

    #[instrument(skip_all, fields(len = boards.len()))]
    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        let history = Self { boards };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            warn!(count = violations.len(), "Rejecting invalid history");
            HistoryError::new(violations)
        })?;
        Ok(history)
    }
}

/// A snapshot list that does not form a valid [`History`].
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_getters::Getters,
)]
#[display("Invalid history: {}", violations.join("; "))]
pub struct HistoryError {
    /// Descriptions of every broken invariant.
    #[error(not(source))]
    violations: Vec<String>,
}

impl HistoryError {
    /// Collects the descriptions of `violations`.
    pub fn new(violations: Vec<InvariantViolation>) -> Self {
        Self {
            violations: violations.into_iter().map(|v| v.description).collect(),
        }
    }
}

/// A history snapshot with the label shown on its jump button.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new, derive_getters::Getters,
)]
pub struct HistoryEntry {
    /// Index into the history.
    index: usize,
    /// "Back to start" or "Go to move #N".
    label: String,
    /// Board at this point.
    board: Board,
}

impl HistoryEntry {
    /// Jump label for history index `index`.
    pub fn label_for(index: usize) -> String {
        if index == 0 {
            "Back to start".to_string()
        } else {
            format!("Go to move #{}", index)
        }
    }
}
