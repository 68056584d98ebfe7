//! Player identities.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Which of the two players an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum PlayerSlot {
    /// Player 1, plays X.
    Player1,
    /// Player 2, plays O.
    Player2,
}

impl PlayerSlot {
    /// The mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            PlayerSlot::Player1 => Mark::X,
            PlayerSlot::Player2 => Mark::O,
        }
    }

    /// The player placing `mark`.
    pub fn for_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => PlayerSlot::Player1,
            Mark::O => PlayerSlot::Player2,
        }
    }

    /// The other slot.
    pub fn other(self) -> Self {
        Self::for_mark(self.mark().opponent())
    }
}

/// Display names of both players.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct PlayerNames {
    /// Name of the X player.
    player1: String,
    /// Name of the O player.
    player2: String,
}

impl PlayerNames {
    /// Creates a pair of names.
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// Name stored for `slot`.
    pub fn name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::Player1 => &self.player1,
            PlayerSlot::Player2 => &self.player2,
        }
    }

    /// Name of the player placing `mark`.
    pub fn name_for(&self, mark: Mark) -> &str {
        self.name(PlayerSlot::for_mark(mark))
    }

    pub(crate) fn set(&mut self, slot: PlayerSlot, value: &str) {
        let target = match slot {
            PlayerSlot::Player1 => &mut self.player1,
            PlayerSlot::Player2 => &mut self.player2,
        };
        target.clear();
        target.push_str(value);
    }

    /// True when neither name is empty.
    pub fn is_complete(&self) -> bool {
        !self.player1.is_empty() && !self.player2.is_empty()
    }
}
