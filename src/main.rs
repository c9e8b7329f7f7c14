//! Terminal tic-tac-toe binary.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Stdout belongs to the TUI, so logs go to a file.
    let log_file =
        std::fs::File::create("tictactoe_tui.log").context("creating log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("starting tic-tac-toe");

    tictactoe_tui::tui::run()
}
