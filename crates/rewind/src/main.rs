//! Rewind - unified CLI.

use anyhow::Result;
use clap::Parser;
use rewind::{AppConfig, Cli, Command, OutputFormat, logging, replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let config = AppConfig::load_or_default(&cli.config)?;
            logging::init_file_tracing(config.log_file())?;
            run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            format,
        } => {
            logging::init_stderr_tracing();
            let config = AppConfig::load_or_default(&cli.config)?;
            info!(%moves, ?jump, "Replaying moves");

            let report = replay(&moves, jump, *config.sort_order(), *config.show_locations())?;
            match format {
                OutputFormat::Text => print!("{}", report.render_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            Ok(())
        }
    }
}
