//! Mutable state of a single game attempt.

use std::collections::BTreeSet;

use tracing::{debug, info, instrument};

use crate::phrase::fold_str;
use crate::{GameConfig, Outcome, Reveal, SecretPhrase, evaluate, reveal};

/// Guesses that matched the phrase, stored case-folded. Order is irrelevant.
pub type GuessSet = BTreeSet<String>;

/// What [`SessionState::record_guess`] did with a submission.
///
/// Only the `Hit` and `Miss` variants changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum GuessRecord {
    /// Empty submission; nothing evaluated.
    Ignored,
    /// The session is already won or lost.
    Rejected,
    /// Matched and added to the guess set.
    Hit,
    /// Matched, but was already in the guess set.
    Repeat,
    /// Did not match; the incorrect count went up.
    Miss,
}

/// Accumulated guesses, incorrect count and outcome for one attempt.
///
/// Owned by the state machine. It survives a trip from the play screen back
/// to the title screen, and is cleared with [`SessionState::reset`] only
/// after a win or a loss.
#[derive(Debug, Clone)]
pub struct SessionState {
    phrase: SecretPhrase,
    max_chances: u16,
    guesses: GuessSet,
    incorrect: u16,
    outcome: Outcome,
}

impl SessionState {
    /// Creates an empty session for the configured phrase.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phrase: config.phrase().clone(),
            max_chances: *config.max_chances(),
            guesses: GuessSet::new(),
            incorrect: 0,
            outcome: Outcome::Ongoing,
        }
    }

    /// The phrase being guessed.
    pub fn phrase(&self) -> &SecretPhrase {
        &self.phrase
    }

    /// Guesses that matched so far.
    pub fn guesses(&self) -> &GuessSet {
        &self.guesses
    }

    /// Incorrect guesses so far, never above [`SessionState::max_chances`].
    pub fn incorrect(&self) -> u16 {
        self.incorrect
    }

    /// Incorrect guesses allowed before the session is lost.
    pub fn max_chances(&self) -> u16 {
        self.max_chances
    }

    /// Incorrect guesses still allowed.
    pub fn remaining(&self) -> u16 {
        self.max_chances - self.incorrect
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Reveal mask for the current guess set.
    #[instrument(skip(self))]
    pub fn reveal(&self) -> Reveal {
        reveal(&self.phrase, &self.guesses)
    }

    /// Scores and records one submitted guess.
    ///
    /// Terminal sessions reject every guess without changing state, so the
    /// incorrect count can never pass `max_chances`.
    #[instrument(skip(self), fields(incorrect = self.incorrect, outcome = %self.outcome))]
    pub fn record_guess(&mut self, text: &str) -> GuessRecord {
        if text.is_empty() {
            return GuessRecord::Ignored;
        }
        if self.outcome.is_terminal() {
            debug!("Guess rejected, session is terminal");
            return GuessRecord::Rejected;
        }

        if evaluate(text, &self.phrase).matched {
            let key: String = fold_str(text).into_iter().collect();
            if !self.guesses.insert(key) {
                debug!("Repeated guess");
                return GuessRecord::Repeat;
            }
            if self.reveal().is_fully_revealed() {
                self.outcome = Outcome::Won;
                info!(guesses = self.guesses.len(), "Phrase fully revealed");
            }
            GuessRecord::Hit
        } else {
            self.incorrect = self.incorrect.saturating_add(1).min(self.max_chances);
            debug!(incorrect = self.incorrect, "Incorrect guess");
            if self.incorrect == self.max_chances {
                self.outcome = Outcome::Lost;
                info!(max_chances = self.max_chances, "Out of chances");
            }
            GuessRecord::Miss
        }
    }

    /// Clears guesses and the incorrect count for a fresh attempt.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(previous = %self.outcome, "Resetting session");
        self.guesses.clear();
        self.incorrect = 0;
        self.outcome = Outcome::Ongoing;
    }
}
