//! Play screen: the gallows, the reveal mask and the guess box.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};
use unicode_width::UnicodeWidthStr;

use super::RETURN_LABEL;
use crate::controls::{Button, InteractiveControl, TextInput, dispatch};
use crate::game::screen::{Screen, ScreenId};
use crate::input::FrameInput;
use crate::ui::{GALLOWS_HEIGHT, left_button_region, render_button, render_gallows, render_title, stage_index};
use hangman_core::{GameConfig, SessionState};

/// State for the play screen.
#[derive(Debug, Getters)]
pub struct PlayingScreen {
    input: TextInput,
    back: Button,
    #[getter(skip)]
    areas: PlayingAreas,
}

#[derive(Debug, Default)]
struct PlayingAreas {
    title: Rect,
    gallows: Rect,
    mask: Rect,
    status: Rect,
}

impl PlayingScreen {
    /// Creates the play screen with an empty guess box.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing PlayingScreen");
        Self {
            input: TextInput::new(),
            back: Button::new(RETURN_LABEL, ScreenId::Title).with_shortcut(KeyCode::Esc),
            areas: PlayingAreas::default(),
        }
    }

    fn status_line(session: &SessionState) -> String {
        let guessed = if session.guesses().is_empty() {
            "-".to_string()
        } else {
            session
                .guesses()
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "Chances left: {} of {}   Guessed: {}",
            session.remaining(),
            session.max_chances(),
            guessed
        )
    }
}

impl Default for PlayingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for PlayingScreen {
    #[instrument(skip(self))]
    fn layout(&mut self, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(GALLOWS_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        self.areas = PlayingAreas {
            title: chunks[0],
            gallows: chunks[1],
            mask: chunks[2],
            status: chunks[3],
        };

        let input_row = chunks[4];
        let margin = 2.min(input_row.width / 2);
        self.input.set_region(Rect {
            x: input_row.x + margin,
            width: input_row.width - 2 * margin,
            ..input_row
        });
        let back = left_button_region(chunks[5], &self.back);
        self.back.set_region(back);
    }

    #[instrument(skip(self, frame, session, config))]
    fn render(&self, frame: &mut Frame, session: &SessionState, config: &GameConfig) {
        render_title(frame, self.areas.title, config.title());

        let stage = stage_index(session.incorrect(), session.max_chances());
        render_gallows(frame, self.areas.gallows, stage, Color::White);

        let mask = Paragraph::new(Line::from(Span::styled(
            session.reveal().mask(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(mask, self.areas.mask);

        let status = Paragraph::new(Self::status_line(session))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(status, self.areas.status);

        let region = self.input.region();
        if !region.is_empty() {
            let buffer = self.input.buffer();
            let text_box = Paragraph::new(buffer.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Guess (Enter: submit, Backspace: edit)"),
            );
            frame.render_widget(text_box, region);

            let offset = u16::try_from(buffer.width()).unwrap_or(u16::MAX);
            let cursor_x = region
                .x
                .saturating_add(1)
                .saturating_add(offset)
                .min(region.right().saturating_sub(2));
            frame.set_cursor_position(Position::new(cursor_x, region.y + 1));
        }

        render_button(frame, &self.back);
    }

    #[instrument(skip(self, input, session))]
    fn handle_input(&mut self, input: &FrameInput, session: &mut SessionState) -> Option<ScreenId> {
        let mut controls: [&mut dyn InteractiveControl; 2] = [&mut self.input, &mut self.back];
        dispatch(&mut controls, input, session)
    }
}
