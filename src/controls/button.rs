//! Clickable button bound to a screen transition.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use ratatui::layout::{Position, Rect};
use tracing::{debug, instrument};
use unicode_width::UnicodeWidthStr;

use super::{InteractiveControl, Presentation};
use crate::game::ScreenId;
use crate::input::FrameInput;
use hangman_core::SessionState;

/// A labelled region that requests a screen change when released over.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Button {
    /// Text drawn inside the button.
    label: String,
    /// Screen requested on activation.
    action: ScreenId,
    /// Keyboard alternative to clicking.
    shortcut: Option<KeyCode>,
    /// Bound region, assigned at layout.
    #[getter(skip)]
    region: Rect,
    /// Whether the pointer was over the region on the last update.
    hovered: bool,
}

impl Button {
    /// Creates a button with an empty region; lay it out before use.
    #[instrument(skip(label))]
    pub fn new(label: impl Into<String>, action: ScreenId) -> Self {
        Self {
            label: label.into(),
            action,
            shortcut: None,
            region: Rect::default(),
            hovered: false,
        }
    }

    /// Adds a keyboard shortcut that activates the button.
    #[instrument(skip(self))]
    pub fn with_shortcut(mut self, key: KeyCode) -> Self {
        self.shortcut = Some(key);
        self
    }

    /// Width the button needs: label plus border and one cell of padding per side.
    pub fn preferred_width(&self) -> u16 {
        u16::try_from(self.label.width()).unwrap_or(u16::MAX).saturating_add(4)
    }

    /// Height the button needs, including its border.
    pub fn preferred_height(&self) -> u16 {
        3
    }

    /// Tracks the pointer and reports the action on release.
    ///
    /// A release outside the region does nothing.
    #[instrument(skip(self), fields(label = %self.label))]
    pub fn update(&mut self, pointer: Position, released: bool) -> Option<ScreenId> {
        if self.region.contains(pointer) {
            self.hovered = true;
            if released {
                debug!(action = %self.action, "Button released");
                return Some(self.action);
            }
        } else {
            self.hovered = false;
        }
        None
    }

    /// Which visual variant the renderer should draw.
    pub fn presentation(&self) -> Presentation {
        if self.hovered {
            Presentation::Emphasized
        } else {
            Presentation::Default
        }
    }
}

impl InteractiveControl for Button {
    fn region(&self) -> Rect {
        self.region
    }

    fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    fn apply(&mut self, input: &FrameInput, _session: &mut SessionState) -> Option<ScreenId> {
        let clicked = self.update(input.pointer, input.pointer_released);
        let pressed = self
            .shortcut
            .filter(|key| input.keys.contains(key))
            .map(|_| self.action);
        clicked.or(pressed)
    }
}
