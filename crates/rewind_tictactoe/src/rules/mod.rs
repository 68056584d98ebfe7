//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Nothing here knows
//! about turns or history, so the session can re-derive everything it shows
//! from whichever snapshot is currently displayed.

pub mod draw;
pub mod win;

pub use draw::is_board_full;
pub use win::{WINNING_LINES, calculate_winner, winning_line};
