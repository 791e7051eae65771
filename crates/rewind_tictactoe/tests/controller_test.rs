//! Tests for the game controller's play and time-travel behavior.

use rewind_tictactoe::{
    GameController, GameStatus, HistoryError, MoveDescription, Player, Position, SortOrder, Square,
    evaluate,
};

fn play_all(game: &mut GameController, moves: &[usize]) {
    for index in moves {
        assert!(game.play_move(*index), "move {index} should apply");
    }
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = GameController::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);

    let outcome = evaluate(game.current_board());
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(
        outcome.line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(game.status().to_string(), "Winner: X");
    assert_eq!(
        game.highlighted_cells(),
        vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn test_draw_scenario() {
    // X O X / X O O / O X X
    let mut game = GameController::new();
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(!evaluate(game.current_board()).is_decided());
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw");
    assert!(game.highlighted_cells().is_empty());
    assert!(game.status().is_over());
}

#[test]
fn test_occupied_square_is_noop() {
    let mut game = GameController::new();
    play_all(&mut game, &[4]);
    let before = game.clone();

    assert!(!game.play_move(4));
    assert_eq!(game, before);
}

#[test]
fn test_move_after_win_is_noop() {
    let mut game = GameController::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);
    let before = game.clone();

    assert!(!game.play_move(8));
    assert_eq!(game, before);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_jump_to_shows_snapshot_without_mutation() {
    let mut game = GameController::new();
    play_all(&mut game, &[0, 4, 1]);
    let history = game.history().clone();

    game.jump_to(1).unwrap();
    assert_eq!(game.current_board(), history.get(1).unwrap());
    assert_eq!(game.history(), &history);
    assert_eq!(game.turn_owner(), Player::O);
}

#[test]
fn test_jump_out_of_range_is_error() {
    let mut game = GameController::new();
    play_all(&mut game, &[0]);

    assert_eq!(
        game.jump_to(2),
        Err(HistoryError::InvalidIndex {
            requested: 2,
            len: 2
        })
    );
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_play_after_jump_discards_future() {
    let mut game = GameController::new();
    play_all(&mut game, &[0, 4, 1, 7]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(2).unwrap();
    play_all(&mut game, &[8]);

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 3);
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(game.current_board().get(Position::TopCenter), Square::Empty);
}

#[test]
fn test_jump_back_from_win_resumes_play() {
    let mut game = GameController::new();
    play_all(&mut game, &[0, 4, 1, 7, 2]);
    game.jump_to(4).unwrap();

    assert_eq!(game.status().to_string(), "Next player: X");
    assert!(game.play_move(6));
    assert_eq!(game.history().len(), 6);
    assert!(!game.status().is_over());
}

#[test]
fn test_move_descriptions_ascending() {
    let mut game = GameController::new();
    play_all(&mut game, &[4, 0]);
    game.jump_to(1).unwrap();

    let entries: Vec<MoveDescription> = game.move_descriptions(SortOrder::Ascending).collect();
    let labels: Vec<String> = entries.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["Game start", "Move #1 (1, 1)", "Move #2 (0, 0)"]);

    let current: Vec<usize> = entries
        .iter()
        .filter(|entry| entry.is_current)
        .map(|entry| entry.move_index)
        .collect();
    assert_eq!(current, [1]);
    assert_eq!(entries[2].label, "Move #2 (0, 0)");

    let short: Vec<String> = game
        .move_descriptions(SortOrder::Ascending)
        .with_locations(false)
        .map(|entry| entry.label)
        .collect();
    assert_eq!(short, ["Game start", "Move #1", "Move #2"]);
}

#[test]
fn test_move_description_json_carries_label() {
    let mut game = GameController::new();
    play_all(&mut game, &[0]);

    let entries: Vec<MoveDescription> = game.move_descriptions(SortOrder::Ascending).collect();
    let json = serde_json::to_value(&entries).unwrap();
    assert_eq!(json[0]["label"], "Game start");
    assert_eq!(json[1]["label"], "Move #1 (0, 0)");
    assert_eq!(json[1]["move_index"], 1);
    assert_eq!(json[1]["is_current"], true);
}

#[test]
fn test_move_descriptions_descending_is_reverse() {
    let mut game = GameController::new();
    play_all(&mut game, &[4, 0, 8]);

    let ascending: Vec<_> = game.move_descriptions(SortOrder::Ascending).collect();
    let mut descending: Vec<_> = game.move_descriptions(SortOrder::Descending).collect();
    descending.reverse();
    assert_eq!(ascending, descending);
    assert_eq!(game.move_descriptions(SortOrder::Descending).len(), 4);
}

#[test]
fn test_status_serializes() {
    let status = GameController::new().status();
    let json = serde_json::to_value(status).unwrap();
    assert_eq!(json, serde_json::json!({ "InProgress": { "next": "X" } }));
}
