//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use rewind_tictactoe::{PlayerSlot, Position, SessionController, SessionPhase};
use tracing::{debug, info, instrument};

use crate::input::move_cursor;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// Wraps the session with the bits of state that only matter on screen:
/// the board cursor, the focused name field and the highlighted history entry.
#[derive(Debug, Getters)]
pub struct App {
    session: SessionController,
    cursor: Position,
    focus: PlayerSlot,
    history_selection: usize,
    show_move_details: bool,
}

impl App {
    /// Creates a new application waiting for player names.
    #[instrument]
    pub fn new(show_move_details: bool) -> Self {
        Self {
            session: SessionController::new(),
            cursor: Position::Center,
            focus: PlayerSlot::Player1,
            history_selection: 0,
            show_move_details,
        }
    }

    /// Fills in a name before the first frame is drawn.
    #[instrument(skip(self))]
    pub fn prefill_name(&mut self, slot: PlayerSlot, name: &str) {
        self.session.set_player_name(slot, name);
    }

    /// Handles a key press and returns the resulting [`Transition`].
    #[instrument(skip(self, key), fields(code = ?key.code, phase = %self.session.phase()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            return Transition::Quit;
        }
        let transition = match self.session.phase() {
            SessionPhase::NamingPlayers => self.handle_naming_key(key),
            SessionPhase::InProgress | SessionPhase::GameOver => self.handle_board_key(key.code),
        };
        let last = self.session.history().len() - 1;
        self.history_selection = self.history_selection.min(last);
        transition
    }

    fn handle_naming_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Esc => Transition::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
                Transition::Stay
            }
            KeyCode::Enter => {
                if self.session.start_game() {
                    self.cursor = Position::Center;
                    self.history_selection = 0;
                } else {
                    debug!("Both names are required to start");
                }
                Transition::Stay
            }
            KeyCode::Backspace => {
                let mut name = self.session.player_names().name(self.focus).to_string();
                name.pop();
                self.session.set_player_name(self.focus, &name);
                Transition::Stay
            }
            // Only plain or shifted characters are typed; chords are ignored.
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                let mut name = self.session.player_names().name(self.focus).to_string();
                name.push(c);
                self.session.set_player_name(self.focus, &name);
                Transition::Stay
            }
            _ => Transition::Stay,
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) -> Transition {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Transition::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_cell_number(&c.to_string()) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('[') => {
                self.history_selection = self.history_selection.saturating_sub(1);
            }
            KeyCode::Char(']') => {
                self.history_selection += 1;
            }
            KeyCode::Char('g') => {
                let last = self.session.history().len() - 1;
                self.session.jump_to_move(self.history_selection.min(last));
            }
            KeyCode::Char('n') => {
                if self.session.new_game() {
                    self.history_selection = 0;
                }
            }
            KeyCode::Char('c') => {
                if self.session.change_players() {
                    self.focus = PlayerSlot::Player1;
                    self.history_selection = 0;
                }
            }
            _ => {}
        }
        Transition::Stay
    }

    fn play(&mut self, pos: Position) {
        if self.session.play_cell(pos) {
            self.history_selection = self.session.current_move();
        }
    }
}
