//! Player session: naming, playing, time travel and resets.
//!
//! [`SessionController`] owns the authoritative history. The rendering
//! collaborator reads from it and feeds user intents back as events. Every
//! event returns whether it changed anything; events that make no sense in
//! the current phase, and illegal clicks, are silent no-ops.

use super::engine::{apply_move, is_terminal};
use super::players::{PlayerNames, PlayerSlot};
use super::rules::{calculate_winner, winning_line};
use super::status::{SessionPhase, StatusLine};
use super::view::SessionView;
use super::{Board, History, HistoryEntry, Mark, Position};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// State machine driving one two-player session.
#[derive(Debug, Clone, Default, Getters)]
pub struct SessionController {
    /// Names of both players.
    player_names: PlayerNames,
    /// Board snapshots of the current game.
    history: History,
    #[getter(skip)]
    current_move: usize,
    #[getter(skip)]
    players_set: bool,
    #[getter(skip)]
    game_over: bool,
}

impl SessionController {
    /// Creates a session waiting for player names.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session");
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    //  Read side
    // ─────────────────────────────────────────────────────────────

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        if !self.players_set {
            SessionPhase::NamingPlayers
        } else if self.game_over {
            SessionPhase::GameOver
        } else {
            SessionPhase::InProgress
        }
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        // `current_move` only ever points into history: moves set it to the
        // new tail, jumps are range-checked and resets set it to 0.
        &self.history.boards()[self.current_move]
    }

    /// Mark that plays next on the displayed board.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Jump targets for the history list.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    /// Status line for the displayed board.
    pub fn status_line(&self) -> StatusLine {
        let board = self.current_board();
        match calculate_winner(board) {
            Some(mark) => StatusLine::Won {
                name: self.player_names.name_for(mark).to_string(),
            },
            None => StatusLine::NextTurn {
                name: self.player_names.name_for(self.next_mark()).to_string(),
            },
        }
    }

    /// Snapshot of everything the renderer displays.
    #[instrument(skip(self))]
    pub fn view(&self) -> SessionView {
        SessionView::new(
            self.phase(),
            *self.current_board(),
            self.current_move,
            self.history_entries(),
            self.player_names.clone(),
            self.status_line(),
            winning_line(self.current_board()),
        )
    }

    // ─────────────────────────────────────────────────────────────
    //  Events
    // ─────────────────────────────────────────────────────────────

    /// Overwrites one player's name. Only accepted while naming players.
    #[instrument(skip(self))]
    pub fn set_player_name(&mut self, slot: PlayerSlot, value: &str) -> bool {
        if self.phase() != SessionPhase::NamingPlayers {
            debug!(phase = %self.phase(), "Ignoring name change outside naming");
            return false;
        }
        self.player_names.set(slot, value);
        true
    }

    /// Starts the game once both names are non-empty.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> bool {
        if self.phase() != SessionPhase::NamingPlayers {
            debug!(phase = %self.phase(), "Ignoring start outside naming");
            return false;
        }
        if !self.player_names.is_complete() {
            debug!("Ignoring start with a missing name");
            return false;
        }
        self.players_set = true;
        info!(
            player1 = %self.player_names.player1(),
            player2 = %self.player_names.player2(),
            "Game started"
        );
        true
    }

    /// Plays the next mark at `position` on the displayed board.
    ///
    /// Ignored when the displayed board is terminal or the cell is taken.
    /// Any snapshots after the displayed one are discarded.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_cell(&mut self, position: Position) -> bool {
        if self.phase() == SessionPhase::NamingPlayers {
            debug!("Ignoring move while naming players");
            return false;
        }
        let board = *self.current_board();
        if is_terminal(&board) {
            debug!("Ignoring move on a finished board");
            return false;
        }
        let next = match apply_move(&board, position, self.next_mark()) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Ignoring illegal move");
                return false;
            }
        };

        self.current_move = self.history.record(self.current_move, next);
        if is_terminal(&next) {
            self.game_over = true;
            info!(status = %self.status_line(), moves = self.current_move, "Game over");
            debug!(board = %next.display(), "Final board");
        }
        true
    }

    /// Displays snapshot `index` and clears the game-over flag.
    ///
    /// Viewing any snapshot, even the final winning one, puts the session
    /// back in progress; moves on a terminal board are still ignored.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid history index.
    #[instrument(skip(self))]
    pub fn jump_to_move(&mut self, index: usize) -> bool {
        if self.phase() == SessionPhase::NamingPlayers {
            debug!("Ignoring jump while naming players");
            return false;
        }
        assert!(
            index < self.history.len(),
            "move index {} out of range (history has {} snapshots)",
            index,
            self.history.len()
        );
        self.current_move = index;
        self.game_over = false;
        debug!(index, "Jumped to move");
        true
    }

    /// Starts a fresh board with the same players. Only accepted after game over.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> bool {
        if self.phase() != SessionPhase::GameOver {
            debug!(phase = %self.phase(), "Ignoring new game before game over");
            return false;
        }
        self.reset_board();
        info!("New game");
        true
    }

    /// Clears both names and the board, returning to naming. Only accepted after game over.
    #[instrument(skip(self))]
    pub fn change_players(&mut self) -> bool {
        if self.phase() != SessionPhase::GameOver {
            debug!(phase = %self.phase(), "Ignoring player change before game over");
            return false;
        }
        self.player_names = PlayerNames::default();
        self.players_set = false;
        self.reset_board();
        info!("Players cleared");
        true
    }

    fn reset_board(&mut self) {
        self.history = History::new();
        self.current_move = 0;
        self.game_over = false;
    }
}
