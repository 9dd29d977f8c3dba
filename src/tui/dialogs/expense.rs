//! Add expense dialog

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    widgets::Clear,
    Frame,
};

use crate::forms::ExpenseField;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{dialog_block, render_error, render_hints};

const FIELDS: [(ExpenseField, &str, &str); 4] = [
    (ExpenseField::Name, "Name", "what was it?"),
    (ExpenseField::Amount, "Amount", "0.00"),
    (ExpenseField::Category, "Category", "e.g. Dining"),
    (ExpenseField::Date, "Date", "today (YYYY-MM-DD)"),
];

/// Render the add expense form
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block("Add Expense", Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, (field, label, placeholder)) in FIELDS.iter().enumerate() {
        let input = TextInput::new(label, app.expense_form.field(*field))
            .label_width(11)
            .placeholder(placeholder)
            .focused(app.expense_field == *field);
        frame.render_widget(input, chunks[i + 1]);
    }

    render_error(frame, app.form_error.as_deref(), chunks[6]);
    render_hints(
        frame,
        &[("Enter", "Save"), ("Tab", "Next"), ("Esc", "Cancel")],
        chunks[7],
    );
}
