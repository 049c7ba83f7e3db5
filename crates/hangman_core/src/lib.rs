//! Hangman game logic.
//!
//! This crate holds the rules only: scoring a guess against the secret
//! phrase, computing the reveal mask, and tracking a single attempt's
//! progress towards a win or a loss. It knows nothing about terminals,
//! screens or input devices.
//!
//! # Architecture
//!
//! - **Phrase**: the validated, immutable [`SecretPhrase`]
//! - **Evaluation**: pure functions [`evaluate`] and [`reveal`]
//! - **Session**: [`SessionState`], the mutable record of one attempt
//! - **Config**: [`GameConfig`], validated once at startup
//!
//! # Example
//!
//! ```
//! use hangman_core::{GameConfig, GuessRecord, Outcome, SessionState};
//!
//! # fn example() -> Result<(), hangman_core::ConfigError> {
//! let config = GameConfig::new("Ada Lovelace", 6)?;
//! let mut session = SessionState::new(&config);
//!
//! assert_eq!(session.record_guess("a"), GuessRecord::Hit);
//! assert_eq!(session.record_guess("ada lovelace"), GuessRecord::Hit);
//! assert_eq!(session.outcome(), Outcome::Won);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod evaluate;
mod outcome;
mod phrase;
mod session;

pub use config::{
    ConfigError, DEFAULT_CAPTION, DEFAULT_MAX_CHANCES, DEFAULT_PHRASE, DEFAULT_TITLE, GameConfig,
};
pub use evaluate::{GuessResult, Reveal, RevealedChar, evaluate, reveal};
pub use outcome::Outcome;
pub use phrase::SecretPhrase;
pub use session::{GuessRecord, GuessSet, SessionState};
