//! Game controller: turn order, move legality, and time travel.
//!
//! The controller owns the snapshot history and the current-move pointer.
//! Everything a presentation layer shows (board, status, move list,
//! highlighted squares) is derived from those two fields on demand.

use crate::history::{GameHistory, HistoryError};
use crate::invariants::{HistoryInvariants, InvariantSet, violation_report};
use crate::rules::{self, Outcome};
use crate::{Board, Move, MoveError, Player, Position, Square};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, info, instrument};

/// Number of moves that fill the board.
pub const MAX_MOVES: usize = 9;

/// Status of the board at the current move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; `next` places the next mark.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// The board is full with no line completed.
    Draw,
}

impl GameStatus {
    /// Whether further moves are refused at this point in history.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {next}"),
            GameStatus::Won { winner, .. } => write!(f, "Winner: {winner}"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct MoveDescription {
    /// Move number this entry jumps to.
    pub move_index: usize,
    /// Text shown for the entry, e.g. `"Move #3 (1, 2)"`.
    pub label: String,
    /// The move that produced this entry; `None` for game start.
    pub played: Option<Move>,
    /// Whether this entry is the board currently shown.
    pub is_current: bool,
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn entry_label(move_index: usize, played: Option<Move>, with_location: bool) -> String {
    match (move_index, played) {
        (0, _) => "Game start".to_string(),
        (n, Some(mov)) if with_location => {
            format!("Move #{n} ({}, {})", mov.position.row(), mov.position.col())
        }
        (n, _) => format!("Move #{n}"),
    }
}

/// Lazy iterator over the move list, produced by
/// [`GameController::move_descriptions`].
#[derive(Debug, Clone)]
pub struct MoveDescriptions<'a> {
    controller: &'a GameController,
    remaining: Range<usize>,
    order: SortOrder,
    with_locations: bool,
}

impl MoveDescriptions<'_> {
    /// Whether labels include the `(row, col)` of each move. On by default.
    pub fn with_locations(mut self, with_locations: bool) -> Self {
        self.with_locations = with_locations;
        self
    }

    fn describe(&self, move_index: usize) -> MoveDescription {
        let played = self.controller.history.move_at(move_index);
        MoveDescription::new(
            move_index,
            entry_label(move_index, played, self.with_locations),
            played,
            move_index == self.controller.current_move,
        )
    }
}

impl Iterator for MoveDescriptions<'_> {
    type Item = MoveDescription;

    fn next(&mut self) -> Option<Self::Item> {
        let index = match self.order {
            SortOrder::Ascending => self.remaining.next(),
            SortOrder::Descending => self.remaining.next_back(),
        }?;
        Some(self.describe(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl ExactSizeIterator for MoveDescriptions<'_> {}

/// Tic-tac-toe game with history navigation.
///
/// Illegal moves are ignored rather than reported; navigation to a move
/// that does not exist is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    history: GameHistory,
    current_move: usize,
}

impl GameController {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
            current_move: 0,
        }
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Returns the move number currently shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the board at the current move.
    pub fn current_board(&self) -> &Board {
        // current_move is kept in range by every mutator.
        &self.history.boards()[self.current_move]
    }

    /// Returns the player who places the next mark.
    pub fn turn_owner(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Evaluates the current board for a winner.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.current_board())
    }

    /// Returns the status of the current board.
    ///
    /// A completed line takes priority over a full board.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn status(&self) -> GameStatus {
        let outcome = self.outcome();
        debug_assert_eq!(
            self.current_move == MAX_MOVES,
            rules::is_full(self.current_board()),
            "move count and board fullness disagree"
        );
        if let (Some(winner), Some(line)) = (outcome.winner(), outcome.line()) {
            GameStatus::Won { winner, line }
        } else if self.current_move == MAX_MOVES {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.turn_owner(),
            }
        }
    }

    /// Checks whether a mark may be placed at `index` on the current board.
    ///
    /// # Errors
    ///
    /// Returns the first reason the move is refused.
    pub fn check_move(&self, index: usize) -> Result<Position, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.current_board().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        if self.outcome().is_decided() {
            return Err(MoveError::GameOver);
        }
        Ok(position)
    }

    /// Places the turn owner's mark at `index`.
    ///
    /// Returns `false` and changes nothing if the index is out of bounds,
    /// the square is occupied, or the current board already has a winner.
    /// Otherwise any history after the current move is discarded, the new
    /// board is appended, and the current move advances to it.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_move(&mut self, index: usize) -> bool {
        let position = match self.check_move(index) {
            Ok(position) => position,
            Err(error) => {
                debug!(%error, "Ignoring move");
                return false;
            }
        };

        let player = self.turn_owner();
        let mut next = self.current_board().clone();
        next.set(position, Square::Occupied(player));

        match self.history.append(self.current_move, next) {
            Ok(latest) => self.current_move = latest,
            Err(error) => {
                debug!(%error, "Ignoring move");
                return false;
            }
        }

        if cfg!(debug_assertions)
            && let Err(violations) = HistoryInvariants::check_all(&self.history)
        {
            panic!(
                "history invariants broken after {position}: {}",
                violation_report(&violations)
            );
        }
        info!(%player, %position, current_move = self.current_move, "Move played");
        true
    }

    /// Shows the board at `move_number` without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidIndex`] if no such move exists.
    #[instrument(skip(self), fields(from = self.current_move))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), HistoryError> {
        self.history.get(move_number)?;
        self.current_move = move_number;
        info!("Jumped");
        Ok(())
    }

    /// Moves one entry back in history. Returns whether the pointer moved.
    pub fn step_back(&mut self) -> bool {
        self.current_move
            .checked_sub(1)
            .is_some_and(|prev| self.jump_to(prev).is_ok())
    }

    /// Moves one entry forward in history. Returns whether the pointer moved.
    pub fn step_forward(&mut self) -> bool {
        self.jump_to(self.current_move + 1).is_ok()
    }

    /// Discards all history and starts over at the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.len(), "Starting new game");
        *self = Self::new();
    }

    /// Describes every history entry in the given order.
    ///
    /// The sequence is computed lazily from history on each call. Labels
    /// carry move locations unless turned off with
    /// [`MoveDescriptions::with_locations`].
    pub fn move_descriptions(&self, order: SortOrder) -> MoveDescriptions<'_> {
        MoveDescriptions {
            controller: self,
            remaining: 0..self.history.len(),
            order,
            with_locations: true,
        }
    }

    /// Squares of the winning line on the current board, or none.
    pub fn highlighted_cells(&self) -> Vec<Position> {
        self.outcome()
            .line()
            .map(|line| line.to_vec())
            .unwrap_or_default()
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
