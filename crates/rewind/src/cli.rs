//! Command-line interface for rewind.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a move sequence and print the resulting game
    Replay {
        /// Comma-separated square indices (0-8, row-major), e.g. "0,4,1,7,2"
        moves: String,

        /// Jump to this move number after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Replay output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable board and move list
    #[default]
    Text,
    /// JSON document
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["rewind", "replay", "0,4", "--jump", "1", "-f", "json"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: "0,4".to_string(),
                jump: Some(1),
                format: OutputFormat::Json,
            })
        );
    }

    #[test]
    fn test_command_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
