//! Non-interactive replay of a move sequence.

use derive_more::{Display, Error, From};
use rewind_tictactoe::{
    GameController, GameStatus, HistoryError, MoveDescription, Position, SortOrder,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Errors from the replay command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// A token in the move list is not a number.
    #[display("Invalid move {_0:?}: expected a square index 0-8")]
    #[from(ignore)]
    InvalidToken(#[error(not(source))] String),

    /// The requested jump target does not exist.
    #[display("Cannot jump to the requested move")]
    Jump(HistoryError),
}

/// Snapshot of a game after replay, for printing.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Moves that were applied.
    pub applied: Vec<usize>,
    /// Moves that were ignored as illegal.
    pub ignored: Vec<usize>,
    /// Move number shown.
    pub current_move: usize,
    /// Status at the current move.
    pub status: GameStatus,
    /// Status as displayed to players.
    pub status_text: String,
    /// Squares of the current board in row-major order.
    pub board: Vec<Option<String>>,
    /// Winning squares, if any.
    pub highlighted: Vec<Position>,
    /// Row-major indices (0-8) of the winning squares; empty or three.
    pub highlighted_indices: Vec<usize>,
    /// Every history entry, in the requested order.
    pub moves: Vec<MoveDescription>,
    #[serde(skip)]
    board_text: String,
}

/// Parses a comma-separated list of square indices.
///
/// Whitespace around tokens and empty tokens are ignored.
///
/// # Errors
///
/// Returns [`ReplayError::InvalidToken`] for anything that is not an
/// unsigned integer. Out-of-range numbers parse and are later ignored.
pub fn parse_moves(moves: &str) -> Result<Vec<usize>, ReplayError> {
    moves
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| ReplayError::InvalidToken(token.to_string()))
        })
        .collect()
}

/// Plays `moves` on a fresh game, then optionally jumps to `jump`.
///
/// `show_locations` controls whether move labels carry `(row, col)`.
///
/// # Errors
///
/// Returns an error if the move list does not parse or the jump target is
/// out of range.
#[instrument]
pub fn replay(
    moves: &str,
    jump: Option<usize>,
    order: SortOrder,
    show_locations: bool,
) -> Result<ReplayReport, ReplayError> {
    let mut game = GameController::new();
    let (mut applied, mut ignored) = (Vec::new(), Vec::new());

    for index in parse_moves(moves)? {
        if game.play_move(index) {
            applied.push(index);
        } else {
            debug!(index, "Move ignored during replay");
            ignored.push(index);
        }
    }

    if let Some(target) = jump {
        game.jump_to(target)?;
    }

    let board = game
        .current_board()
        .squares()
        .iter()
        .map(|square| square.player().map(|player| player.to_string()))
        .collect();

    let highlighted = game.highlighted_cells();

    Ok(ReplayReport {
        applied,
        ignored,
        current_move: game.current_move(),
        status: game.status(),
        status_text: game.status().to_string(),
        board,
        highlighted_indices: highlighted.iter().map(|pos| pos.to_index()).collect(),
        highlighted,
        moves: game
            .move_descriptions(order)
            .with_locations(show_locations)
            .collect(),
        board_text: game.current_board().display(),
    })
}

impl ReplayReport {
    /// Renders the report as plain text.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.status_text, self.board_text);

        if !self.highlighted.is_empty() {
            let cells: Vec<&str> = self.highlighted.iter().map(|pos| pos.label()).collect();
            out.push_str(&format!("\nWinning line: {}\n", cells.join(", ")));
        }
        if !self.ignored.is_empty() {
            out.push_str(&format!("\nIgnored moves: {:?}\n", self.ignored));
        }

        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.is_current { "*" } else { " " };
            out.push_str(&format!("{marker} {}\n", entry.label));
        }
        out
    }
}
