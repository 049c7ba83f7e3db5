//! Game state machine. Owns the session and resolves screen transitions.

use ratatui::{Frame, layout::Rect};
use tracing::{debug, info, instrument, warn};

use crate::game::screen::{Screen, ScreenId};
use crate::game::screens::{GameOverScreen, PlayingScreen, TitleScreen, WonScreen};
use crate::input::FrameInput;
use hangman_core::{GameConfig, Outcome, SessionState};

/// Active screen and the controls it owns.
#[derive(Debug)]
enum ActiveScreen {
    Title(TitleScreen),
    Playing(PlayingScreen),
    Won(WonScreen),
    GameOver(GameOverScreen),
}

impl ActiveScreen {
    /// Builds a fresh screen for `id`, or `None` for [`ScreenId::Quit`].
    fn enter(id: ScreenId) -> Option<Self> {
        match id {
            ScreenId::Title => Some(Self::Title(TitleScreen::new())),
            ScreenId::Playing => Some(Self::Playing(PlayingScreen::new())),
            ScreenId::Won => Some(Self::Won(WonScreen::new())),
            ScreenId::GameOver => Some(Self::GameOver(GameOverScreen::new())),
            ScreenId::Quit => None,
        }
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Title(s) => s,
            Self::Playing(s) => s,
            Self::Won(s) => s,
            Self::GameOver(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Title(s) => s,
            Self::Playing(s) => s,
            Self::Won(s) => s,
            Self::GameOver(s) => s,
        }
    }
}

/// Returns true if the transition table allows `from -> to`.
///
/// | From      | To                 |
/// |-----------|--------------------|
/// | TITLE     | PLAYING, QUIT      |
/// | PLAYING   | WON, GAME_OVER, TITLE |
/// | WON       | TITLE              |
/// | GAME_OVER | TITLE              |
///
/// QUIT has no outgoing transitions.
pub fn is_allowed(from: ScreenId, to: ScreenId) -> bool {
    use ScreenId::*;

    matches!(
        (from, to),
        (Title, Playing)
            | (Title, Quit)
            | (Playing, Won)
            | (Playing, GameOver)
            | (Playing, Title)
            | (Won, Title)
            | (GameOver, Title)
    )
}

/// Top-level driver: current screen, session state and transition rules.
///
/// The session lives across screen changes within one attempt. It is reset
/// only when leaving [`ScreenId::Won`] or [`ScreenId::GameOver`].
#[derive(Debug)]
pub struct GameStateMachine {
    config: GameConfig,
    session: SessionState,
    current: ScreenId,
    screen: Option<ActiveScreen>,
}

impl GameStateMachine {
    /// Creates a machine on the title screen with an empty session.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        info!(max_chances = *config.max_chances(), "Creating GameStateMachine");
        let session = SessionState::new(&config);
        Self {
            config,
            session,
            current: ScreenId::Title,
            screen: ActiveScreen::enter(ScreenId::Title),
        }
    }

    /// Screen currently shown.
    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Session state of the current attempt.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Mutable session access, for driving the machine without a screen.
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Process-wide configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns true once the machine has reached [`ScreenId::Quit`].
    pub fn is_finished(&self) -> bool {
        self.current.is_terminal()
    }

    /// Lays out the active screen's controls for a frame of size `area`.
    #[instrument(skip(self))]
    pub fn layout(&mut self, area: Rect) {
        if let Some(screen) = self.screen.as_mut() {
            screen.as_screen_mut().layout(area);
        }
    }

    /// Renders the active screen.
    #[instrument(skip(self, frame))]
    pub fn render(&self, frame: &mut Frame) {
        if let Some(screen) = self.screen.as_ref() {
            screen
                .as_screen()
                .render(frame, &self.session, &self.config);
        }
    }

    /// Runs one frame: feeds `input` to the active screen and applies any
    /// resulting transition. Returns the screen active afterwards.
    ///
    /// On the play screen, a won or lost outcome takes precedence over a
    /// control action from the same frame.
    #[instrument(skip(self, input), fields(current = %self.current))]
    pub fn step(&mut self, input: &FrameInput) -> ScreenId {
        if self.is_finished() {
            return self.current;
        }
        if input.interrupted {
            info!("Interrupted, quitting");
            return self.enter(ScreenId::Quit);
        }

        let requested = match self.screen.as_mut() {
            Some(screen) => screen.as_screen_mut().handle_input(input, &mut self.session),
            None => None,
        };

        let next = match (self.current, self.session.outcome()) {
            (ScreenId::Playing, Outcome::Won) => Some(ScreenId::Won),
            (ScreenId::Playing, Outcome::Lost) => Some(ScreenId::GameOver),
            _ => requested,
        };

        match next {
            Some(to) => self.transition(to),
            None => self.current,
        }
    }

    /// Moves to `to` if the transition table allows it.
    ///
    /// Leaving a screen that ended an attempt resets the session.
    #[instrument(skip(self), fields(from = %self.current))]
    pub fn transition(&mut self, to: ScreenId) -> ScreenId {
        let from = self.current;
        if !is_allowed(from, to) {
            warn!(to = %to, "Transition not allowed, staying");
            return from;
        }
        if from.ends_attempt() {
            self.session.reset();
        }
        self.enter(to)
    }

    fn enter(&mut self, to: ScreenId) -> ScreenId {
        info!(from = %self.current, to = %to, "Screen transition");
        self.current = to;
        self.screen = ActiveScreen::enter(to);
        debug!(
            incorrect = self.session.incorrect(),
            guesses = self.session.guesses().len(),
            "Session carried into screen"
        );
        self.current
    }
}
