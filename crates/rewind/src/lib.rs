//! Rewind - terminal tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Game model**: the `rewind_tictactoe` crate
//! - **TUI**: interactive play and history navigation (ratatui)
//! - **Replay**: apply a move list and print the result
//! - **Config**: presentation settings from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{AppConfig, ConfigError};
pub use replay::{ReplayError, ReplayReport, parse_moves, replay};
pub use tui::{App, run_tui};
