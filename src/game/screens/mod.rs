//! Screen implementations for the game state machine.

mod game_over;
mod playing;
mod title;
mod won;

pub use game_over::GameOverScreen;
pub use playing::PlayingScreen;
pub use title::TitleScreen;
pub use won::WonScreen;

/// Label shared by every button that leads back to the title screen.
pub const RETURN_LABEL: &str = "Return to main menu";
