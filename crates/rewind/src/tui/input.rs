//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}
