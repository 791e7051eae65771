//! Tic-tac-toe with move history and time travel.
//!
//! This crate is the pure game model: no I/O, no rendering.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] finds a completed line on a board
//! - **History**: [`GameHistory`] stores one board snapshot per move and
//!   discards the future when a move is played in the past
//! - **Controller**: [`GameController`] owns history and the current move,
//!   and derives status, move list, and highlights from them
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, SortOrder};
//!
//! let mut game = GameController::new();
//! for index in [0, 4, 1, 7, 2] {
//!     game.play_move(index);
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: X");
//!
//! let labels: Vec<String> = game
//!     .move_descriptions(SortOrder::Descending)
//!     .map(|entry| entry.to_string())
//!     .collect();
//! assert_eq!(labels.first().map(String::as_str), Some("Move #5 (0, 2)"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use controller::{
    GameController, GameStatus, MAX_MOVES, MoveDescription, MoveDescriptions, SortOrder,
};
pub use history::{GameHistory, HistoryError};
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use types::{Board, Player, Square};

/// Alias used by the presentation layer.
pub type Mark = Player;
