//! Stateless rendering helpers shared by every screen.

mod gallows;

pub use gallows::{GALLOWS_HEIGHT, GALLOWS_WIDTH, STAGES, render_gallows, stage_index};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::controls::{Button, InteractiveControl, Presentation};

/// Returns a `width` x `height` rectangle centred in `area`, clipped to it.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

/// Region for `button` centred horizontally at the top of `row`.
pub fn centered_button_region(row: Rect, button: &Button) -> Rect {
    let region = center_rect(row, button.preferred_width(), button.preferred_height());
    Rect { y: row.y, ..region }
}

/// Region for `button` at the left edge of `row`, one cell in.
pub fn left_button_region(row: Rect, button: &Button) -> Rect {
    let x = row.x.saturating_add(1).min(row.right());
    Rect {
        x,
        y: row.y,
        width: button.preferred_width().min(row.right() - x),
        height: button.preferred_height().min(row.height),
    }
}

/// Draws a button in the variant its hover flag selects.
pub fn render_button(frame: &mut Frame, button: &Button) {
    let region = button.region();
    if region.is_empty() {
        return;
    }

    let (style, border) = match button.presentation() {
        Presentation::Default => (Style::default(), BorderType::Plain),
        Presentation::Emphasized => (
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            BorderType::Thick,
        ),
    };

    let widget = Paragraph::new(button.label().as_str())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(border));
    frame.render_widget(widget, region);
}

/// Draws the bordered title bar used at the top of every screen.
pub fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}
