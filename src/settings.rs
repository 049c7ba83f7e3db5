//! Game settings from built-in defaults, an optional TOML file and CLI overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::cli::Cli;
use hangman_core::{
    ConfigError, DEFAULT_CAPTION, DEFAULT_MAX_CHANCES, DEFAULT_PHRASE, GameConfig, SecretPhrase,
};

/// Unvalidated settings as read from a file and the command line.
///
/// Every field is optional; missing ones fall back to the built-in
/// defaults when converted with [`Settings::into_config`].
///
/// ```toml
/// phrase = "Emmy Noether"
/// max_chances = 8
/// title = "Mathematician Hangman"
/// caption = "1882 - 1935"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Secret phrase, validated as it is read.
    pub phrase: Option<SecretPhrase>,
    /// Incorrect guesses allowed.
    pub max_chances: Option<u16>,
    /// Title shown on every screen.
    pub title: Option<String>,
    /// Line shown under the phrase on the Won screen.
    pub caption: Option<String>,
}

impl Settings {
    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!("Settings file loaded");
        Ok(settings)
    }

    /// Reads the file named by `--config`, if any, and applies CLI overrides.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.with_overrides(cli)
    }

    /// Replaces fields with any values given on the command line.
    ///
    /// Fails when `--phrase` is empty or blank.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(phrase) = &cli.phrase {
            debug!("Phrase overridden from command line");
            self.phrase = Some(SecretPhrase::new(phrase.as_str())?);
        }
        if let Some(max_chances) = cli.max_chances {
            debug!(max_chances, "max_chances overridden from command line");
            self.max_chances = Some(max_chances);
        }
        Ok(self)
    }

    /// Validates the settings into a [`GameConfig`].
    ///
    /// The default caption belongs to the default phrase, so it is only
    /// applied when neither the phrase nor the caption was configured.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn into_config(self) -> Result<GameConfig, ConfigError> {
        let caption = match (&self.phrase, self.caption) {
            (_, Some(caption)) => Some(caption),
            (None, None) => Some(DEFAULT_CAPTION.to_string()),
            (Some(_), None) => None,
        };
        let phrase = self
            .phrase
            .map_or_else(|| DEFAULT_PHRASE.to_string(), String::from);
        let max_chances = self.max_chances.unwrap_or(DEFAULT_MAX_CHANCES);

        let mut config = GameConfig::new(phrase, max_chances)?.with_caption(caption);
        if let Some(title) = self.title {
            config = config.with_title(title);
        }
        Ok(config)
    }
}
