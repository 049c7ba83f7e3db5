//! Game over screen: the finished gallows.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tracing::{debug, instrument};

use super::RETURN_LABEL;
use crate::controls::{Button, InteractiveControl, dispatch};
use crate::game::screen::{Screen, ScreenId};
use crate::input::FrameInput;
use crate::ui::{GALLOWS_HEIGHT, STAGES, left_button_region, render_button, render_gallows, render_title};
use hangman_core::{GameConfig, SessionState};

/// State for the game over screen.
#[derive(Debug, Getters)]
pub struct GameOverScreen {
    back: Button,
    #[getter(skip)]
    areas: GameOverAreas,
}

#[derive(Debug, Default)]
struct GameOverAreas {
    title: Rect,
    gallows: Rect,
    banner: Rect,
}

impl GameOverScreen {
    /// Creates the game over screen.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameOverScreen");
        Self {
            back: Button::new(RETURN_LABEL, ScreenId::Title).with_shortcut(KeyCode::Esc),
            areas: GameOverAreas::default(),
        }
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameOverScreen {
    #[instrument(skip(self))]
    fn layout(&mut self, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(GALLOWS_HEIGHT),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        self.areas = GameOverAreas {
            title: chunks[0],
            gallows: chunks[1],
            banner: chunks[2],
        };
        let back = left_button_region(chunks[3], &self.back);
        self.back.set_region(back);
    }

    #[instrument(skip(self, frame, _session, config))]
    fn render(&self, frame: &mut Frame, _session: &SessionState, config: &GameConfig) {
        render_title(frame, self.areas.title, config.title());
        render_gallows(frame, self.areas.gallows, STAGES.len() - 1, Color::Red);

        let banner = Paragraph::new("Game Over")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(banner, self.areas.banner);

        render_button(frame, &self.back);
    }

    #[instrument(skip(self, input, session))]
    fn handle_input(&mut self, input: &FrameInput, session: &mut SessionState) -> Option<ScreenId> {
        let mut controls: [&mut dyn InteractiveControl; 1] = [&mut self.back];
        dispatch(&mut controls, input, session)
    }
}
