//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// Rows top to bottom, columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board: the winner and the line they completed.
///
/// Both fields are `Some` or both are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    winner: Option<Player>,
    line: Option<[Position; 3]>,
}

impl Outcome {
    /// No winner on the board.
    pub fn undecided() -> Self {
        Self::default()
    }

    fn won(winner: Player, line: [Position; 3]) -> Self {
        Self {
            winner: Some(winner),
            line: Some(line),
        }
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<[Position; 3]> {
        self.line
    }

    /// Whether someone has won.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}

/// Evaluates the board for three in a row.
///
/// Lines are checked in [`LINES`] order and the first uniform, non-empty
/// line is reported.
#[instrument(skip(board), ret)]
pub fn evaluate(board: &Board) -> Outcome {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Outcome::won(player, line);
        }
    }

    Outcome::undecided()
}
