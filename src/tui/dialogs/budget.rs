//! Set budget dialog
//!
//! A zero limit clears the category's budget.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::forms::BudgetField;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{dialog_block, render_error, render_hints};

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block("Set Budget", Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category
            Constraint::Length(1), // Limit
            Constraint::Length(1), // Note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.budget_form;
    let category = TextInput::new("Category", &form.category)
        .label_width(11)
        .placeholder("e.g. Dining")
        .focused(app.budget_field == BudgetField::Category);
    frame.render_widget(category, chunks[1]);

    let limit = TextInput::new("Limit", &form.limit)
        .label_width(11)
        .placeholder("0.00")
        .focused(app.budget_field == BudgetField::Limit);
    frame.render_widget(limit, chunks[2]);

    let note = Line::from(Span::styled(
        "A limit of 0 removes the budget",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(note), chunks[3]);

    render_error(frame, app.form_error.as_deref(), chunks[5]);
    render_hints(
        frame,
        &[("Enter", "Save"), ("Tab", "Switch field"), ("Esc", "Cancel")],
        chunks[6],
    );
}
