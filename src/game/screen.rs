//! Screen trait and identifiers for the game state machine.

use ratatui::{Frame, layout::Rect};

use crate::input::FrameInput;
use hangman_core::{GameConfig, SessionState};

/// Identifies one full-frame mode of the application.
///
/// Controls carry these as their actions, and the
/// [`GameStateMachine`](crate::GameStateMachine) resolves them into the next
/// active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreenId {
    /// Title menu with Start and Quit.
    Title,
    /// Active play: guessing letters.
    Playing,
    /// The phrase was fully revealed.
    Won,
    /// The incorrect-guess budget ran out.
    GameOver,
    /// Terminal state: the frame loop ends.
    Quit,
}

impl ScreenId {
    /// Returns true for the state that ends the process.
    pub fn is_terminal(self) -> bool {
        matches!(self, ScreenId::Quit)
    }

    /// Returns true for the screens that end a game attempt.
    pub fn ends_attempt(self) -> bool {
        matches!(self, ScreenId::Won | ScreenId::GameOver)
    }
}

/// Trait implemented by each screen in the game state machine.
///
/// Each screen owns its controls, lays them out, renders itself and feeds
/// input to its controls. The state machine calls these methods once per
/// frame.
pub trait Screen {
    /// Assigns regions to the screen's controls for a frame of size `area`.
    fn layout(&mut self, area: Rect);

    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &SessionState, config: &GameConfig);

    /// Feeds one frame of input to the controls, in a fixed order.
    ///
    /// Returns the screen requested by the first control that produced an
    /// action.
    fn handle_input(&mut self, input: &FrameInput, session: &mut SessionState) -> Option<ScreenId>;
}
