//! Rendering tests against an in-memory terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rewind_tui::{App, draw};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Flattens the buffer into lines of text.
fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area();
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn started(details: bool) -> App {
    let mut app = App::new(details);
    type_text(&mut app, "Alice");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Bob");
    press(&mut app, KeyCode::Enter);
    app
}

#[test]
fn test_naming_screen_shows_inputs() {
    let mut app = App::new(true);
    type_text(&mut app, "Ali");
    let text = render(&app);

    assert!(text.contains("Player X name"));
    assert!(text.contains("Player O name"));
    assert!(text.contains("Ali"));
    assert!(text.contains("Both names required"));
}

#[test]
fn test_board_screen_shows_numbers_status_and_history() {
    let mut app = started(false);
    press(&mut app, KeyCode::Char('5'));
    let text = render(&app);

    assert!(text.contains("Next turn: Bob"));
    assert!(text.contains(" 1 "));
    assert!(text.contains(" X "));
    assert!(text.contains("Back to start"));
    assert!(text.contains("Go to move #1"));
    assert!(!text.contains("Center)"));
}

#[test]
fn test_move_details_in_history() {
    let mut app = started(true);
    press(&mut app, KeyCode::Char('5'));
    let text = render(&app);

    assert!(text.contains("Go to move #1 (X -> Center)"));
}

#[test]
fn test_game_over_screen_offers_lifecycle_actions() {
    let mut app = started(true);
    type_text(&mut app, "14253");
    let text = render(&app);

    assert!(text.contains("Alice has won"));
    assert!(text.contains("n: New game"));
    assert!(text.contains("c: Change players"));
}
