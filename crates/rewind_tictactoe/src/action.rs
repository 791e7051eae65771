//! Move actions and the reasons a move can be refused.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// History stores board snapshots, so moves are recovered by comparing
/// consecutive snapshots rather than being stored directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move request was refused.
///
/// These come from routine input (clicking a filled square, playing on after
/// a win), so the controller absorbs them instead of returning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Square index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
