//! The guess entry box.
//!
//! Accepts one character per keystroke cycle: after a character is typed
//! the box locks until the player deletes a character or submits.

use derive_getters::Getters;
use ratatui::layout::Rect;
use tracing::{debug, instrument};

use super::InteractiveControl;
use crate::game::ScreenId;
use crate::input::{FrameInput, TextEvent};
use hangman_core::{GuessRecord, SessionState};

/// Whether the box accepts another character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum InputState {
    /// Ready for a character.
    #[default]
    Typing,
    /// A character was just typed; further characters are dropped.
    Locked,
}

/// Single-line text box that submits its buffer as a guess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct TextInput {
    /// Current contents.
    buffer: String,
    /// Lock state.
    state: InputState,
    /// Bound region, assigned at layout.
    #[getter(skip)]
    region: Rect,
}

impl TextInput {
    /// Creates an empty, unlocked box.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one text event.
    ///
    /// Returns what the session did with the guess when the event was a
    /// submit of a non-empty buffer, `None` otherwise.
    #[instrument(skip(self, session), fields(buffer = %self.buffer, state = %self.state))]
    pub fn handle(&mut self, event: TextEvent, session: &mut SessionState) -> Option<GuessRecord> {
        match event {
            TextEvent::Enter(c) => {
                if self.state == InputState::Typing {
                    self.buffer.push(c);
                    self.state = InputState::Locked;
                }
                None
            }
            TextEvent::Delete => {
                self.buffer.pop();
                self.state = InputState::Typing;
                None
            }
            TextEvent::Submit => {
                if self.buffer.is_empty() {
                    return None;
                }
                let guess = std::mem::take(&mut self.buffer);
                self.state = InputState::Typing;
                let record = session.record_guess(&guess);
                debug!(guess = %guess, record = %record, "Guess submitted");
                Some(record)
            }
        }
    }
}

impl InteractiveControl for TextInput {
    fn region(&self) -> Rect {
        self.region
    }

    fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    fn apply(&mut self, input: &FrameInput, session: &mut SessionState) -> Option<ScreenId> {
        for event in &input.text {
            self.handle(*event, session);
        }
        None
    }
}
