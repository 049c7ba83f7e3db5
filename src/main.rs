//! Mathematician Hangman - terminal entry point.

#![warn(missing_docs)]

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use mathematician_hangman::{Cli, GameController, Settings, terminal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    info!("Starting Mathematician Hangman");

    // A bad config must stop us before the terminal is touched.
    let config = Settings::load(&cli)?.into_config()?;
    info!(
        max_chances = *config.max_chances(),
        phrase_len = config.phrase().len(),
        "Configuration loaded"
    );

    let mut tui = terminal::setup(config.title())?;
    let mut controller = GameController::new(config);
    let res = controller.run(&mut tui).await;
    let restored = terminal::restore(&mut tui);

    info!("Exiting");
    terminal::shutdown_result(res, restored)
}

/// Sends log output to a file so it does not interfere with the TUI.
#[instrument]
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
