//! Game flow: screens, the state machine that switches between them, and
//! the terminal frame loop.

mod controller;
mod machine;
mod screen;
mod screens;

pub use controller::GameController;
pub use machine::{GameStateMachine, is_allowed};
pub use screen::{Screen, ScreenId};
pub use screens::{GameOverScreen, PlayingScreen, RETURN_LABEL, TitleScreen, WonScreen};
