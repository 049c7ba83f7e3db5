//! Won screen: the revealed phrase and its caption.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tracing::{debug, instrument};

use super::RETURN_LABEL;
use crate::controls::{Button, InteractiveControl, dispatch};
use crate::game::screen::{Screen, ScreenId};
use crate::input::FrameInput;
use crate::ui::{center_rect, left_button_region, render_button, render_title};
use hangman_core::{GameConfig, SessionState};

/// State for the won screen.
#[derive(Debug, Getters)]
pub struct WonScreen {
    back: Button,
    #[getter(skip)]
    areas: WonAreas,
}

#[derive(Debug, Default)]
struct WonAreas {
    title: Rect,
    body: Rect,
}

impl WonScreen {
    /// Creates the won screen.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing WonScreen");
        Self {
            back: Button::new(RETURN_LABEL, ScreenId::Title).with_shortcut(KeyCode::Esc),
            areas: WonAreas::default(),
        }
    }
}

impl Default for WonScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for WonScreen {
    #[instrument(skip(self))]
    fn layout(&mut self, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        self.areas = WonAreas {
            title: chunks[0],
            body: chunks[1],
        };
        let back = left_button_region(chunks[2], &self.back);
        self.back.set_region(back);
    }

    #[instrument(skip(self, frame, session, config))]
    fn render(&self, frame: &mut Frame, session: &SessionState, config: &GameConfig) {
        render_title(frame, self.areas.title, config.title());

        let mut lines = vec![
            Line::styled(
                "You guessed it!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(
                session.phrase().as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(caption) = config.caption() {
            lines.push(Line::from(caption.as_str()));
        }

        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let body = center_rect(self.areas.body, self.areas.body.width, height);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);

        render_button(frame, &self.back);
    }

    #[instrument(skip(self, input, session))]
    fn handle_input(&mut self, input: &FrameInput, session: &mut SessionState) -> Option<ScreenId> {
        let mut controls: [&mut dyn InteractiveControl; 1] = [&mut self.back];
        dispatch(&mut controls, input, session)
    }
}
