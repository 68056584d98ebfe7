//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Cell, Mark, PlayerSlot, Position, SessionPhase, SessionView, StatusLine};
use strum::IntoEnumIterator;

use crate::app::App;

/// Renders one frame for the current phase.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.session().view();
    match view.phase() {
        SessionPhase::NamingPlayers => draw_naming(frame, app, &view),
        SessionPhase::InProgress | SessionPhase::GameOver => draw_game(frame, app, &view),
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_naming(frame: &mut Frame, app: &App, view: &SessionView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Player X
            Constraint::Length(3), // Player O
            Constraint::Min(1),
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);

    for (slot, area) in PlayerSlot::iter().zip([chunks[1], chunks[2]]) {
        let focused = slot == *app.focus();
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let title = format!("Player {} name", slot.mark());
        let input = Paragraph::new(view.player_names().name(slot))
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(input, area);
    }

    let help_text = if view.player_names().is_complete() {
        "Type name | Tab: Switch player | Enter: Start game | Esc: Quit"
    } else {
        "Type name | Tab: Switch player | Both names required | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);
}

fn draw_game(frame: &mut Frame, app: &App, view: &SessionView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, view);
    draw_history(frame, body[1], app, view);

    let status_style = match view.status() {
        StatusLine::Won { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        StatusLine::NextTurn { .. } => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status().to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help_text = match view.phase() {
        SessionPhase::GameOver => "n: New game | c: Change players | [ ]: Select | g: Go | q: Quit",
        _ => "Arrows/1-9: Move | Enter: Play | [ ]: Select | g: Go | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &SessionView) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, view, positions);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, view: &SessionView, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], app, view, *pos);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, view: &SessionView, pos: Position) {
    let symbol = match view.board().get(pos) {
        Cell::Empty => format!(" {} ", pos.to_index() + 1),
        Cell::Occupied(mark) => format!(" {} ", mark),
    };
    let base_style = match view.board().get(pos) {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Mark::X) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Cell::Occupied(Mark::O) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    };

    let in_winning_line = view.winning_line().is_some_and(|line| line.contains(&pos));
    let style = if pos == *app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if in_winning_line {
        base_style.bg(Color::Blue)
    } else {
        base_style
    };

    // Vertically centre the symbol in the 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, view: &SessionView) {
    let items: Vec<ListItem> = view
        .history()
        .iter()
        .map(|entry| {
            let mut text = entry.label().clone();
            if *app.show_move_details()
                && let Some(mov) = app.session().history().move_at(*entry.index())
            {
                text.push_str(&format!(" ({})", mov));
            }
            let style = if *entry.index() == *view.current_move() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Move history"))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(*app.history_selection()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
