//! Command-line interface for mathematician_hangman.

use std::path::PathBuf;

use clap::Parser;

/// Mathematician Hangman - reveal the hidden name before the gallows is complete
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "mathematician_hangman")]
#[command(about = "Terminal hangman game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Secret phrase to guess (overrides the config file)
    #[arg(long)]
    pub phrase: Option<String>,

    /// Incorrect guesses allowed (overrides the config file)
    #[arg(long)]
    pub max_chances: Option<u16>,

    /// File that receives log output
    #[arg(long, default_value = "mathematician_hangman.log")]
    pub log_file: PathBuf,
}
