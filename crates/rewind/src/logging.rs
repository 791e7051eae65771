//! Tracing setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a file.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set, otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Sends log output to `path`, truncating it.
pub fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    // Don't fail if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends log output to stderr, keeping stdout for command output.
pub fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
