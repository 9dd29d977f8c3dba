//! Status bar view
//!
//! Shows balance, total spent, remaining and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;

fn money_color(amount: Money) -> Color {
    if amount.is_negative() {
        Color::Red
    } else {
        Color::Green
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = &app.settings.currency_symbol;
    let dashboard = &app.dashboard;

    let mut spans = vec![
        Span::styled(" Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            dashboard.balance.format_with_symbol(symbol),
            Style::default().fg(money_color(dashboard.balance)),
        ),
        Span::raw(" │ "),
        Span::styled("Spent: ", Style::default().fg(Color::White)),
        Span::styled(
            dashboard.total_spent.format_with_symbol(symbol),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" │ "),
        Span::styled("Remaining: ", Style::default().fg(Color::White)),
        Span::styled(
            dashboard.remaining.format_with_symbol(symbol),
            Style::default()
                .fg(money_color(dashboard.remaining))
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if !dashboard.over_budget.is_empty() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("Over: {}", dashboard.over_budget.join(", ")),
            Style::default().fg(Color::Red),
        ));
    }

    let hints = " a:Add  d:Delete  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    if padding_len > 0 {
        spans.push(Span::raw(" ".repeat(padding_len)));
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
