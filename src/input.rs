//! Frame input ingestion.
//!
//! Raw terminal events are folded into one [`FrameInput`] per frame: the
//! latest pointer position, whether the left button was released, and the
//! ordered text-editing events. Controls only ever see a `FrameInput`.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tracing::{debug, instrument, trace};

/// A text-editing event destined for a [`TextInput`](crate::TextInput).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEvent {
    /// A character was typed.
    Enter(char),
    /// Backspace.
    Delete,
    /// Return key.
    Submit,
}

/// Everything the controls need to know about one frame's input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Last known pointer position, in terminal cells.
    pub pointer: Position,
    /// True if the left button was released during this frame.
    pub pointer_released: bool,
    /// Text events in arrival order.
    pub text: Vec<TextEvent>,
    /// Non-character keys pressed this frame, for button shortcuts.
    pub keys: Vec<KeyCode>,
    /// True if Ctrl+C was pressed.
    pub interrupted: bool,
}

impl FrameInput {
    /// A frame with the pointer at `(x, y)` and nothing else happening.
    pub fn hover(x: u16, y: u16) -> Self {
        Self {
            pointer: Position::new(x, y),
            ..Self::default()
        }
    }

    /// A frame where the left button is released at `(x, y)`.
    pub fn click(x: u16, y: u16) -> Self {
        Self {
            pointer: Position::new(x, y),
            pointer_released: true,
            ..Self::default()
        }
    }

    /// A frame carrying only the given text events.
    pub fn typed(text: impl IntoIterator<Item = TextEvent>) -> Self {
        Self {
            text: text.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A frame where a single non-character key was pressed.
    pub fn key(code: KeyCode) -> Self {
        let mut input = Self {
            keys: vec![code],
            ..Self::default()
        };
        if let Some(event) = text_event_for(code) {
            input.text.push(event);
        }
        input
    }

    /// Returns true if nothing happened this frame besides pointer position.
    pub fn is_idle(&self) -> bool {
        !self.pointer_released && self.text.is_empty() && self.keys.is_empty() && !self.interrupted
    }
}

/// Text event produced by a non-character key, if any.
fn text_event_for(code: KeyCode) -> Option<TextEvent> {
    match code {
        KeyCode::Backspace => Some(TextEvent::Delete),
        KeyCode::Enter => Some(TextEvent::Submit),
        _ => None,
    }
}

/// Folds batches of terminal events into [`FrameInput`] values.
///
/// The pointer position carries over between frames, since terminals only
/// report it when the mouse moves.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    pointer: Position,
}

impl InputCollector {
    /// Creates a collector with the pointer at the origin.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pointer position seen.
    pub fn pointer(&self) -> Position {
        self.pointer
    }

    /// Builds the input for one frame from all events received during it.
    #[instrument(skip(self, events))]
    pub fn collect(&mut self, events: impl IntoIterator<Item = Event>) -> FrameInput {
        let mut input = FrameInput::default();
        for event in events {
            match event {
                Event::Key(key) => self.on_key(key, &mut input),
                Event::Mouse(mouse) => self.on_mouse(mouse, &mut input),
                other => trace!(event = ?other, "Ignoring event"),
            }
        }
        input.pointer = self.pointer;
        if !input.is_idle() {
            debug!(input = ?input, "Frame input collected");
        }
        input
    }

    fn on_key(&mut self, key: KeyEvent, input: &mut FrameInput) {
        // crossterm reports both press and release on some platforms.
        if key.kind == KeyEventKind::Release {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.interrupted = true;
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => input.text.push(TextEvent::Enter(c)),
            code => {
                input.keys.push(code);
                if let Some(event) = text_event_for(code) {
                    input.text.push(event);
                }
            }
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent, input: &mut FrameInput) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
                self.pointer = Position::new(mouse.column, mouse.row);
            }
            MouseEventKind::Up(button) => {
                self.pointer = Position::new(mouse.column, mouse.row);
                if button == MouseButton::Left {
                    input.pointer_released = true;
                }
            }
            _ => {}
        }
    }
}
