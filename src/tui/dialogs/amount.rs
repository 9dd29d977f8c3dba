//! Balance dialog, used for both setting the balance and depositing

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::tui::app::{AmountMode, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{dialog_block, render_error, render_hints};

pub fn render(frame: &mut Frame, app: &App, mode: AmountMode) {
    let area = centered_rect_fixed(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block(mode.title(), Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Current balance
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let current = Line::from(vec![
        Span::styled("Current:  ", Style::default().fg(Color::Yellow)),
        Span::styled(
            app.dashboard
                .balance
                .format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(current), chunks[1]);

    let label = match mode {
        AmountMode::SetBalance => "New",
        AmountMode::Deposit => "Add",
    };
    let input = TextInput::new(label, &app.amount_form.amount)
        .label_width(10)
        .placeholder("0.00")
        .focused(true);
    frame.render_widget(input, chunks[2]);

    render_error(frame, app.form_error.as_deref(), chunks[4]);
    render_hints(frame, &[("Enter", "Save"), ("Esc", "Cancel")], chunks[5]);
}
