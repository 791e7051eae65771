//! Empty start invariant: move 0 is the empty board.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: The first history entry is the empty board.
pub struct EmptyStartInvariant;

impl Invariant<GameHistory> for EmptyStartInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.boards().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_holds() {
        assert!(EmptyStartInvariant::holds(&GameHistory::new()));
    }
}
