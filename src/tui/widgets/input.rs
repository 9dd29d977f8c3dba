//! Text input widget
//!
//! Renders one form field. Editing happens on the form structs in
//! `crate::forms`; this widget only draws their current text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A labelled single-line input
#[derive(Debug, Clone, Default)]
pub struct TextInput<'a> {
    label: &'a str,
    content: &'a str,
    placeholder: &'a str,
    focused: bool,
    /// Width reserved for the label so fields line up
    label_width: u16,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, content: &'a str) -> Self {
        Self {
            label,
            content,
            label_width: label.chars().count() as u16 + 2,
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn label_width(mut self, width: u16) -> Self {
        self.label_width = width;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let label_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let label_line = Line::from(vec![
            Span::styled(self.label, label_style),
            Span::raw(": "),
        ]);
        buf.set_line(area.x, area.y, &label_line, self.label_width.min(area.width));

        let input_start = area.x + self.label_width.min(area.width);
        let input_width = area.width.saturating_sub(self.label_width) as usize;

        let (text, style) = if self.content.is_empty() && !self.focused {
            (self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (self.content, Style::default().fg(Color::White))
        };
        buf.set_stringn(input_start, area.y, text, input_width, style);

        if self.focused {
            let cursor_x = input_start + self.content.chars().count() as u16;
            if cursor_x < area.x + area.width {
                buf.set_string(
                    cursor_x,
                    area.y,
                    " ",
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
