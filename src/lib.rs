//! Mathematician Hangman: a terminal hangman game.
//!
//! The player reveals a hidden phrase one guess at a time before the
//! gallows drawing is complete.
//!
//! # Architecture
//!
//! - **Rules**: guess evaluation and session bookkeeping live in
//!   [`hangman_core`]
//! - **Controls**: [`Button`] and [`TextInput`] turn frame input into
//!   screen changes or text edits
//! - **Screens**: one [`Screen`] per mode (title, playing, won, game over)
//! - **State machine**: [`GameStateMachine`] owns the session and applies
//!   the transition table
//! - **Frame loop**: [`GameController`] draws, collects input, and steps
//!   the machine on a real terminal
//!
//! # Example
//!
//! ```
//! use crossterm::event::KeyCode;
//! use hangman_core::GameConfig;
//! use mathematician_hangman::{FrameInput, GameStateMachine, ScreenId, TextEvent};
//!
//! # fn example() -> Result<(), hangman_core::ConfigError> {
//! let mut machine = GameStateMachine::new(GameConfig::new("Ada Lovelace", 6)?);
//! assert_eq!(machine.step(&FrameInput::key(KeyCode::Enter)), ScreenId::Playing);
//!
//! machine.step(&FrameInput::typed([TextEvent::Enter('a'), TextEvent::Submit]));
//! assert!(machine.session().guesses().contains("a"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod controls;
mod game;
mod input;
mod settings;
pub mod terminal;
pub mod ui;

// Crate-level exports - CLI and settings
pub use cli::Cli;
pub use settings::Settings;

// Crate-level exports - Input
pub use input::{FrameInput, InputCollector, TextEvent};

// Crate-level exports - Controls
pub use controls::{Button, InputState, InteractiveControl, Presentation, TextInput, dispatch};

// Crate-level exports - Screens and state machine
pub use game::{
    GameController, GameOverScreen, GameStateMachine, PlayingScreen, RETURN_LABEL, Screen,
    ScreenId, TitleScreen, WonScreen, is_allowed,
};
