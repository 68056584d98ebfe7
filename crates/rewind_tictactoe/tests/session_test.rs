//! End-to-end tests for the player session.

use rewind_tictactoe::{
    Board, Cell, History, Mark, PlayerSlot, Position, SessionController, SessionPhase,
    calculate_winner, is_terminal,
};

fn session_with(names: (&str, &str)) -> SessionController {
    let mut session = SessionController::new();
    session.set_player_name(PlayerSlot::Player1, names.0);
    session.set_player_name(PlayerSlot::Player2, names.1);
    assert!(session.start_game());
    session
}

fn play(session: &mut SessionController, cells: &[usize]) {
    for &i in cells {
        let pos = Position::from_index(i).expect("valid index");
        assert!(session.play_cell(pos), "move at {} rejected", i);
    }
}

#[test]
fn test_alice_wins_top_row() {
    let mut session = session_with(("Alice", "Bob"));
    assert_eq!(session.status_line().to_string(), "Next turn: Alice");

    play(&mut session, &[0, 3, 1, 4]);
    assert_eq!(session.status_line().to_string(), "Next turn: Alice");

    play(&mut session, &[2]);
    assert_eq!(calculate_winner(session.current_board()), Some(Mark::X));
    assert_eq!(session.status_line().to_string(), "Alice has won");
    assert_eq!(session.phase(), SessionPhase::GameOver);
}

#[test]
fn test_jump_then_move_truncates_history() {
    let mut session = session_with(("Alice", "Bob"));
    play(&mut session, &[0, 4, 8, 1, 2]);
    assert_eq!(session.current_move(), 5);

    let kept = *session.history().get(2).expect("index in range");
    assert!(session.jump_to_move(2));
    assert_eq!(session.status_line().to_string(), "Next turn: Alice");

    play(&mut session, &[6]);
    assert_eq!(session.history().len(), 4);
    assert_eq!(session.current_move(), 3);
    assert_eq!(session.history().get(2), Some(&kept));
    assert_eq!(
        session.current_board().get(Position::BottomLeft),
        Cell::Occupied(Mark::X)
    );
}

#[test]
fn test_jump_back_to_start_then_replay() {
    let mut session = session_with(("Alice", "Bob"));
    play(&mut session, &[4, 0]);
    assert!(session.jump_to_move(0));
    assert_eq!(session.history().len(), 3);

    play(&mut session, &[8]);
    assert_eq!(session.history().len(), 2);
    assert_eq!(
        session.current_board().get(Position::BottomRight),
        Cell::Occupied(Mark::X)
    );
}

#[test]
fn test_full_board_draw_ends_game() {
    let mut session = session_with(("Alice", "Bob"));
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(is_terminal(session.current_board()));
    assert_eq!(calculate_winner(session.current_board()), None);
    assert_eq!(session.phase(), SessionPhase::GameOver);
    // Nobody won, so the status line still names the player whose turn it would be.
    assert_eq!(session.status_line().to_string(), "Next turn: Bob");
}

#[test]
fn test_change_players_from_game_over() {
    let mut session = session_with(("Alice", "Bob"));
    play(&mut session, &[0, 3, 1, 4, 2]);
    assert!(session.change_players());

    assert_eq!(session.phase(), SessionPhase::NamingPlayers);
    assert_eq!(session.player_names().player1(), "");
    assert_eq!(session.player_names().player2(), "");
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.current_move(), 0);

    assert!(!session.start_game());
    session.set_player_name(PlayerSlot::Player1, "Carol");
    assert!(!session.start_game());
    session.set_player_name(PlayerSlot::Player2, "Dave");
    assert!(session.start_game());
    assert_eq!(session.status_line().to_string(), "Next turn: Carol");
}

#[test]
fn test_new_game_after_draw() {
    let mut session = session_with(("Alice", "Bob"));
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(session.new_game());
    assert_eq!(session.phase(), SessionPhase::InProgress);
    assert_eq!(session.player_names().player2(), "Bob");
    play(&mut session, &[4]);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_view_serializes_for_renderer() {
    let mut session = session_with(("Alice", "Bob"));
    play(&mut session, &[4]);
    let json = serde_json::to_value(session.view()).expect("serializable view");

    assert_eq!(json["phase"], "InProgress");
    assert_eq!(json["current_move"], 1);
    assert_eq!(json["history"][0]["label"], "Back to start");
    assert_eq!(json["history"][1]["label"], "Go to move #1");
    assert_eq!(json["player_names"]["player1"], "Alice");
    assert!(json["winning_line"].is_null());
}

#[test]
fn test_history_survives_json_round_trip() {
    let mut session = session_with(("Alice", "Bob"));
    play(&mut session, &[4, 0, 8]);

    let json = serde_json::to_string(session.history()).expect("serializable history");
    let restored: History = serde_json::from_str(&json).expect("valid history");
    assert_eq!(&restored, session.history());
    assert_eq!(restored.latest(), session.current_board());
}

#[test]
fn test_empty_history_is_rejected() {
    let err = serde_json::from_str::<History>(r#"{"boards":[]}"#).expect_err("empty history");
    assert!(err.to_string().contains("Invalid history"), "{}", err);
}

#[test]
fn test_history_with_skipped_turn_is_rejected() {
    let two_o = Board::new()
        .with(Position::TopLeft, Cell::Occupied(Mark::O))
        .with(Position::Center, Cell::Occupied(Mark::O));
    let json = serde_json::json!({ "boards": [Board::new(), two_o] });
    assert!(serde_json::from_value::<History>(json).is_err());
}
