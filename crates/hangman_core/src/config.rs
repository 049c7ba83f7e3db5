//! Process-wide game configuration, validated once at startup.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

use crate::SecretPhrase;

/// Phrase used when none is configured.
pub const DEFAULT_PHRASE: &str = "Ada Lovelace";

/// Incorrect guesses allowed before the session is lost.
pub const DEFAULT_MAX_CHANCES: u16 = 6;

/// Title shown in the terminal title bar and on every screen.
pub const DEFAULT_TITLE: &str = "Mathematician Hangman";

/// Caption shown under the default phrase once it is revealed.
pub const DEFAULT_CAPTION: &str = "1815 - 1852";

/// Read-only configuration shared by every screen for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameConfig {
    /// The phrase the player must reveal.
    phrase: SecretPhrase,
    /// Incorrect guesses allowed; always at least one.
    max_chances: u16,
    /// Title shown on screen and in the terminal title bar.
    title: String,
    /// Optional line shown under the phrase on the Won screen.
    caption: Option<String>,
}

impl GameConfig {
    /// Creates a validated configuration with the default title and no caption.
    ///
    /// Fails when the phrase is empty or `max_chances` is zero. Either
    /// condition must stop the program before play starts.
    #[track_caller]
    #[instrument(skip(phrase))]
    pub fn new(phrase: impl Into<String>, max_chances: u16) -> Result<Self, ConfigError> {
        let phrase = SecretPhrase::new(phrase)?;
        if max_chances == 0 {
            return Err(ConfigError::new(
                "max_chances must be at least 1".to_string(),
            ));
        }
        debug!(phrase_len = phrase.len(), max_chances, "Game config validated");
        Ok(Self {
            phrase,
            max_chances,
            title: DEFAULT_TITLE.to_string(),
            caption: None,
        })
    }

    /// Replaces the title.
    #[instrument(skip(self, title))]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the caption. Blank captions are dropped.
    #[instrument(skip(self, caption))]
    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption.filter(|c| !c.trim().is_empty());
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
