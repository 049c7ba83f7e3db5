//! The secret phrase the player has to reveal.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::ConfigError;

/// Folds a single character for case-insensitive comparison.
///
/// Always maps one character to one character, so positions in a folded
/// phrase line up with positions in the original.
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Folds a whole string into comparable characters.
pub(crate) fn fold_str(text: &str) -> Vec<char> {
    text.chars().map(fold).collect()
}

/// The fixed phrase the player must fully reveal.
///
/// Case is preserved for display. Matching always goes through the folded
/// form, so comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[display("{}", text)]
pub struct SecretPhrase {
    text: String,
    folded: Vec<char>,
}

impl SecretPhrase {
    /// Validates and wraps a phrase.
    ///
    /// A phrase made only of spaces would be revealed before the first
    /// guess, so it is rejected along with the empty string.
    #[track_caller]
    #[instrument(skip(text))]
    pub fn new(text: impl Into<String>) -> Result<Self, ConfigError> {
        let text = text.into();
        if text.chars().all(|c| c == ' ') {
            return Err(ConfigError::new(
                "Secret phrase must contain at least one non-space character".to_string(),
            ));
        }
        let folded = fold_str(&text);
        Ok(Self { text, folded })
    }

    /// Returns the phrase as configured.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the case-folded characters of the phrase.
    pub(crate) fn folded(&self) -> &[char] {
        &self.folded
    }

    /// Number of characters in the phrase.
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    /// Always false: a phrase is validated non-empty at construction.
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

impl TryFrom<String> for SecretPhrase {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<SecretPhrase> for String {
    fn from(phrase: SecretPhrase) -> Self {
        phrase.text
    }
}
