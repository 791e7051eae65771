//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameHistory, Player, Square};

/// Invariant: Players alternate turns, starting with X.
///
/// Every square filled between entry `i - 1` and entry `i` must have been
/// empty before and now hold the mark of the player to move at `i - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .boards()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let expected = Square::Occupied(Player::for_move(i));
                pair[1]
                    .changed_positions(&pair[0])
                    .into_iter()
                    .all(|pos| pair[0].is_empty(pos) && pair[1].get(pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate starting with X, and marks are never overwritten"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    fn history_of(moves: &[(Position, Player)]) -> GameHistory {
        let mut history = GameHistory::new();
        let mut board = Board::new();
        for (i, (pos, player)) in moves.iter().enumerate() {
            board.set(*pos, Square::Occupied(*player));
            history.append(i, board.clone()).unwrap();
        }
        history
    }

    #[test]
    fn test_alternating_holds() {
        let history = history_of(&[
            (Position::TopLeft, Player::X),
            (Position::Center, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert!(AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_o_first_violates() {
        let history = history_of(&[(Position::TopLeft, Player::O)]);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let history = history_of(&[
            (Position::TopLeft, Player::X),
            (Position::Center, Player::X),
        ]);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_overwrite_violates() {
        let history = history_of(&[
            (Position::Center, Player::X),
            (Position::Center, Player::O),
        ]);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
