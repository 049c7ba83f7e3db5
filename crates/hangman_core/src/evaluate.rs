//! Guess scoring and reveal-mask computation.
//!
//! Both functions are pure. A guess matches when its case-folded text
//! appears anywhere in the case-folded phrase, so multi-character guesses
//! (up to the whole phrase) are allowed.

use std::fmt;

use tracing::{debug, instrument};

use crate::phrase::fold_str;
use crate::{GuessSet, SecretPhrase};

/// Result of scoring one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    /// True iff the guess occurs in the phrase, ignoring case.
    pub matched: bool,
}

/// Start offsets of every occurrence of `needle` in `haystack`.
///
/// Overlapping occurrences are all reported. An empty needle has none.
fn occurrences<'a>(haystack: &'a [char], needle: &'a [char]) -> impl Iterator<Item = usize> + 'a {
    let width = needle.len().max(1);
    haystack
        .windows(width)
        .enumerate()
        .filter(move |(_, window)| !needle.is_empty() && *window == needle)
        .map(|(start, _)| start)
}

/// Scores `guess` against `phrase`.
///
/// The empty string is trivially a substring and therefore matches;
/// callers never submit it.
#[instrument(skip(phrase), fields(guess = %guess))]
pub fn evaluate(guess: &str, phrase: &SecretPhrase) -> GuessResult {
    let needle = fold_str(guess);
    let matched = needle.is_empty() || occurrences(phrase.folded(), &needle).next().is_some();
    debug!(matched, "Guess evaluated");
    GuessResult { matched }
}

/// How one character of the phrase is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealedChar {
    /// A literal space, always visible.
    Space,
    /// A character covered by some guess, in its original case.
    Shown(char),
    /// A character no guess has covered yet.
    Hidden,
}

/// The partially hidden rendering of the phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    cells: Vec<RevealedChar>,
}

impl Reveal {
    /// Per-character reveal state, in phrase order.
    pub fn cells(&self) -> &[RevealedChar] {
        &self.cells
    }

    /// True iff no character is still hidden.
    pub fn is_fully_revealed(&self) -> bool {
        !self.cells.contains(&RevealedChar::Hidden)
    }

    /// Number of characters still hidden.
    pub fn hidden_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == RevealedChar::Hidden)
            .count()
    }

    /// Renders the mask with each character padded to three columns.
    ///
    /// Revealed characters show as ` c `, hidden ones as ` _ ` and
    /// spaces as three blanks.
    pub fn mask(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Reveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                RevealedChar::Space => f.write_str("   ")?,
                RevealedChar::Shown(c) => write!(f, " {} ", c)?,
                RevealedChar::Hidden => f.write_str(" _ ")?,
            }
        }
        Ok(())
    }
}

/// Computes which characters of `phrase` the guesses in `guesses` reveal.
///
/// A character is revealed when it lies inside an occurrence of some guess.
/// For single-character guesses this is plain membership of the folded
/// character. Spaces are never hidden.
#[instrument(skip(phrase, guesses), fields(guesses = guesses.len()))]
pub fn reveal(phrase: &SecretPhrase, guesses: &GuessSet) -> Reveal {
    let folded = phrase.folded();
    let mut covered = vec![false; folded.len()];

    for guess in guesses {
        let needle = fold_str(guess);
        for start in occurrences(folded, &needle) {
            covered[start..start + needle.len()]
                .iter_mut()
                .for_each(|slot| *slot = true);
        }
    }

    let cells = phrase
        .as_str()
        .chars()
        .zip(covered)
        .map(|(c, covered)| match c {
            ' ' => RevealedChar::Space,
            _ if covered => RevealedChar::Shown(c),
            _ => RevealedChar::Hidden,
        })
        .collect();

    Reveal { cells }
}
