//! Interactive controls: clickable buttons and the guess text box.
//!
//! A control turns one frame's [`FrameInput`] into either a requested screen
//! change or a change to its own state. Controls are created when a screen
//! is entered and dropped with it.

mod button;
mod text_input;

pub use button::Button;
pub use text_input::{InputState, TextInput};

use ratatui::layout::Rect;
use tracing::{debug, instrument};

use crate::game::ScreenId;
use crate::input::FrameInput;
use hangman_core::SessionState;

/// Visual variant of a control, chosen from its hover flag.
///
/// Purely presentational; no game logic reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// Normal rendering.
    #[default]
    Default,
    /// Pointer is over the control.
    Emphasized,
}

/// Common interface of everything a screen feeds input to.
pub trait InteractiveControl {
    /// Region the control occupies in the last laid-out frame.
    fn region(&self) -> Rect;

    /// Assigns the region for the next frame.
    fn set_region(&mut self, region: Rect);

    /// Applies one frame's input, returning the screen it asks to switch to.
    fn apply(&mut self, input: &FrameInput, session: &mut SessionState) -> Option<ScreenId>;
}

/// Feeds `input` to each control in order and returns the first action.
///
/// Controls after the one that produced an action are not fed, so at most
/// one transition comes out of a frame.
#[instrument(skip_all, fields(controls = controls.len()))]
pub fn dispatch(
    controls: &mut [&mut dyn InteractiveControl],
    input: &FrameInput,
    session: &mut SessionState,
) -> Option<ScreenId> {
    for control in controls.iter_mut() {
        if let Some(action) = control.apply(input, session) {
            debug!(action = %action, "Control produced action");
            return Some(action);
        }
    }
    None
}
