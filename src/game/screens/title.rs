//! Title screen: Start a game or Quit.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use tracing::{debug, instrument};

use crate::controls::{Button, InteractiveControl, dispatch};
use crate::game::screen::{Screen, ScreenId};
use crate::input::FrameInput;
use crate::ui::{
    GALLOWS_HEIGHT, STAGES, centered_button_region, render_button, render_gallows, render_title,
};
use hangman_core::{GameConfig, SessionState};

/// State for the title screen.
#[derive(Debug, Getters)]
pub struct TitleScreen {
    start: Button,
    quit: Button,
    #[getter(skip)]
    areas: TitleAreas,
}

#[derive(Debug, Default)]
struct TitleAreas {
    title: Rect,
    banner: Rect,
    help: Rect,
}

impl TitleScreen {
    /// Creates the title screen with its Start and Quit buttons.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing TitleScreen");
        Self {
            start: Button::new("Start", ScreenId::Playing).with_shortcut(KeyCode::Enter),
            quit: Button::new("Quit", ScreenId::Quit).with_shortcut(KeyCode::Esc),
            areas: TitleAreas::default(),
        }
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TitleScreen {
    #[instrument(skip(self))]
    fn layout(&mut self, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(GALLOWS_HEIGHT),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.areas = TitleAreas {
            title: chunks[0],
            banner: chunks[1],
            help: chunks[5],
        };
        let start = centered_button_region(chunks[2], &self.start);
        let quit = centered_button_region(chunks[4], &self.quit);
        self.start.set_region(start);
        self.quit.set_region(quit);
    }

    #[instrument(skip(self, frame, _session, config))]
    fn render(&self, frame: &mut Frame, _session: &SessionState, config: &GameConfig) {
        render_title(frame, self.areas.title, config.title());
        render_gallows(frame, self.areas.banner, STAGES.len() - 1, Color::Cyan);
        render_button(frame, &self.start);
        render_button(frame, &self.quit);

        let help = Paragraph::new("Click a button | Enter: Start | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, self.areas.help);
    }

    #[instrument(skip(self, input, session))]
    fn handle_input(&mut self, input: &FrameInput, session: &mut SessionState) -> Option<ScreenId> {
        let mut controls: [&mut dyn InteractiveControl; 2] = [&mut self.start, &mut self.quit];
        dispatch(&mut controls, input, session)
    }
}
