//! Board snapshot history with branch-discarding append.

use crate::{Board, Move};
use tracing::{debug, instrument};

/// Error returned when a move number does not name a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested move is outside `[0, len)`.
    #[display("Move {requested} is out of range (history has {len} entries)")]
    InvalidIndex {
        /// The move number that was asked for.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Ordered board snapshots, indexed by move number.
///
/// Entry 0 is always the empty board and is never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    boards: Vec<Board>,
}

impl GameHistory {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Move number of the last snapshot.
    pub fn latest(&self) -> usize {
        self.boards.len() - 1
    }

    /// All snapshots in move order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    fn check_index(&self, requested: usize) -> Result<(), HistoryError> {
        if requested < self.boards.len() {
            Ok(())
        } else {
            Err(HistoryError::InvalidIndex {
                requested,
                len: self.boards.len(),
            })
        }
    }

    /// Returns the board at the given move number.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidIndex`] if `move_number` is not in `[0, len)`.
    pub fn get(&self, move_number: usize) -> Result<&Board, HistoryError> {
        self.check_index(move_number)?;
        Ok(&self.boards[move_number])
    }

    /// Appends `board` after entry `at`, discarding any later entries.
    ///
    /// Returns the move number of the appended board.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidIndex`] if `at` is not in `[0, len)`.
    /// History is unchanged on error.
    #[instrument(skip(self, board), fields(len = self.boards.len()))]
    pub fn append(&mut self, at: usize, board: Board) -> Result<usize, HistoryError> {
        self.check_index(at)?;

        let discarded = self.boards.len() - (at + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future history");
        }
        self.boards.truncate(at + 1);
        self.boards.push(board);

        Ok(self.latest())
    }

    /// The move that produced entry `move_number`.
    ///
    /// Returns `None` for the starting board, for out-of-range numbers, and
    /// for entries that do not differ from their predecessor by one mark.
    pub fn move_at(&self, move_number: usize) -> Option<Move> {
        let prev = self.boards.get(move_number.checked_sub(1)?)?;
        let board = self.boards.get(move_number)?;

        match board.changed_positions(prev).as_slice() {
            [position] => board
                .get(*position)
                .player()
                .map(|player| Move::new(player, *position)),
            _ => None,
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn with_mark(board: &Board, pos: Position, player: Player) -> Board {
        let mut next = board.clone();
        next.set(pos, Square::Occupied(player));
        next
    }

    #[test]
    fn test_new_history_has_empty_board() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), Ok(&Board::new()));
    }

    #[test]
    fn test_get_out_of_range() {
        let history = GameHistory::new();
        assert_eq!(
            history.get(1),
            Err(HistoryError::InvalidIndex {
                requested: 1,
                len: 1
            })
        );
    }

    #[test]
    fn test_append_at_end_grows() {
        let mut history = GameHistory::new();
        let next = with_mark(&Board::new(), Position::Center, Player::X);
        assert_eq!(history.append(0, next.clone()), Ok(1));
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1), Ok(&next));
    }

    #[test]
    fn test_append_in_past_discards_future() {
        let mut history = GameHistory::new();
        let mut board = Board::new();
        for (i, pos) in [Position::TopLeft, Position::Center, Position::TopRight]
            .into_iter()
            .enumerate()
        {
            board = with_mark(&board, pos, Player::for_move(i));
            history.append(i, board.clone()).unwrap();
        }
        assert_eq!(history.len(), 4);

        let branch = with_mark(history.get(1).unwrap(), Position::BottomLeft, Player::O);
        assert_eq!(history.append(1, branch.clone()), Ok(2));
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(2), Ok(&branch));
    }

    #[test]
    fn test_append_invalid_index_leaves_history() {
        let mut history = GameHistory::new();
        let before = history.clone();
        assert!(history.append(3, Board::new()).is_err());
        assert_eq!(history, before);
    }

    #[test]
    fn test_move_at() {
        let mut history = GameHistory::new();
        let next = with_mark(&Board::new(), Position::MiddleRight, Player::X);
        history.append(0, next).unwrap();

        assert_eq!(history.move_at(0), None);
        assert_eq!(
            history.move_at(1),
            Some(Move::new(Player::X, Position::MiddleRight))
        );
        assert_eq!(history.move_at(2), None);
    }
}
