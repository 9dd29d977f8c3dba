//! Dialog modules for the TUI
//!
//! Modal forms and prompts drawn over the active tab

pub mod amount;
pub mod budget;
pub mod confirm;
pub mod expense;
pub mod help;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered dialog frame with a bold title
pub(crate) fn dialog_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// Inline validation error, or nothing
pub(crate) fn render_error(frame: &mut Frame, error: Option<&str>, area: Rect) {
    if let Some(message) = error {
        let line = Line::from(Span::styled(message, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Key hints along the bottom of a form
pub(crate) fn render_hints(frame: &mut Frame, hints: &[(&str, &str)], area: Rect) {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(key.to_string(), Style::default().fg(Color::Green)),
                Span::raw(format!(" {}  ", action)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
