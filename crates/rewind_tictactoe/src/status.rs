//! Session phase and status line.

use serde::{Deserialize, Serialize};

/// Where the session is in its lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum SessionPhase {
    /// Names are being entered; no board is shown.
    #[display("Naming players")]
    NamingPlayers,
    /// The displayed board accepts moves.
    #[display("In progress")]
    InProgress,
    /// The last move ended the game.
    #[display("Game over")]
    GameOver,
}

/// One-line summary of the displayed board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum StatusLine {
    /// The displayed board has a winner.
    #[display("{name} has won")]
    Won {
        /// Winner's display name.
        name: String,
    },
    /// Nobody has won on the displayed board.
    #[display("Next turn: {name}")]
    NextTurn {
        /// Name of the player to move.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let won = StatusLine::Won { name: "Alice".into() };
        let next = StatusLine::NextTurn { name: "Bob".into() };
        assert_eq!(won.to_string(), "Alice has won");
        assert_eq!(next.to_string(), "Next turn: Bob");
    }

    #[test]
    fn test_phase_text() {
        assert_eq!(SessionPhase::GameOver.to_string(), "Game over");
    }
}
