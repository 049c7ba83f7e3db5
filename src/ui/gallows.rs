//! ASCII gallows drawings, one per stage of incorrect guesses.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use super::center_rect;

/// Drawing width in cells.
pub const GALLOWS_WIDTH: u16 = 9;

/// Drawing height in rows.
pub const GALLOWS_HEIGHT: u16 = 7;

/// Drawings from an empty gallows to the complete figure.
pub const STAGES: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Maps an incorrect-guess count onto a stage in [`STAGES`].
///
/// The last stage is reached exactly when `incorrect == max_chances`,
/// whatever the configured budget.
pub fn stage_index(incorrect: u16, max_chances: u16) -> usize {
    let last = STAGES.len() - 1;
    if max_chances == 0 {
        return last;
    }
    (usize::from(incorrect) * last / usize::from(max_chances)).min(last)
}

/// Draws the given stage centred in `area`.
pub fn render_gallows(frame: &mut Frame, area: Rect, stage: usize, color: Color) {
    let drawing = STAGES[stage.min(STAGES.len() - 1)];
    let widget = Paragraph::new(drawing)
        .style(Style::default().fg(color))
        .alignment(Alignment::Left);
    frame.render_widget(widget, center_rect(area, GALLOWS_WIDTH, GALLOWS_HEIGHT));
}
