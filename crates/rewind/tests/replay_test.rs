//! Tests for the replay command.

use rewind::{ReplayError, replay};
use rewind_tictactoe::{HistoryError, Position, SortOrder};

#[test]
fn test_replay_win_text() {
    let report = replay("0,4,1,7,2", None, SortOrder::Ascending, true).unwrap();
    let text = report.render_text();

    assert!(text.starts_with("Winner: X\n\nX|X|X\n-+-+-\n4|O|6\n-+-+-\n7|O|9\n"));
    assert!(text.contains("Winning line: Top-left, Top-center, Top-right"));
    assert!(text.contains("  Game start\n"));
    assert!(text.contains("* Move #5 (0, 2)\n"));
}

#[test]
fn test_replay_jump_back_descending() {
    let report = replay("0,4,1,7,2", Some(2), SortOrder::Descending, false).unwrap();

    assert_eq!(report.current_move, 2);
    assert_eq!(report.status_text, "Next player: X");
    assert!(report.highlighted.is_empty());
    let order: Vec<usize> = report.moves.iter().map(|entry| entry.move_index).collect();
    assert_eq!(order, [5, 4, 3, 2, 1, 0]);

    let text = report.render_text();
    assert!(text.contains("* Move #2\n"));
    assert!(!text.contains("(0, 0)"));
}

#[test]
fn test_replay_json() {
    let report = replay("0,4,1,7,2", None, SortOrder::Ascending, true).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["status_text"], "Winner: X");
    assert_eq!(json["board"][0], "X");
    assert_eq!(json["board"][2], "X");
    assert_eq!(json["board"][3], serde_json::Value::Null);
    assert_eq!(json["highlighted"], serde_json::json!(["TopLeft", "TopCenter", "TopRight"]));
    assert_eq!(json["highlighted_indices"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["moves"][0]["label"], "Game start");
    assert_eq!(json["moves"][1]["label"], "Move #1 (0, 0)");
    assert_eq!(json["moves"][5]["is_current"], true);
}

#[test]
fn test_replay_json_without_locations() {
    let report = replay("0,4", None, SortOrder::Ascending, false).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["moves"][1]["label"], "Move #1");
    assert_eq!(json["highlighted_indices"], serde_json::json!([]));
}

#[test]
fn test_replay_skips_moves_after_win() {
    let report = replay("0,4,1,7,2,8", None, SortOrder::Ascending, true).unwrap();
    assert_eq!(report.ignored, vec![8]);
    assert_eq!(report.highlighted.first(), Some(&Position::TopLeft));
}

#[test]
fn test_replay_errors() {
    assert_eq!(
        replay("0,four", None, SortOrder::Ascending, true).unwrap_err(),
        ReplayError::InvalidToken("four".to_string())
    );
    assert_eq!(
        replay("0", Some(2), SortOrder::Ascending, true).unwrap_err(),
        ReplayError::Jump(HistoryError::InvalidIndex {
            requested: 2,
            len: 2
        })
    );
}
