//! Analytics view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_date;
use crate::tui::app::App;

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<24}", label), Style::default().fg(Color::Yellow)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Render the analytics tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = &app.dashboard.analytics;
    let symbol = &app.settings.currency_symbol;

    let top = match &summary.top_category {
        Some((category, amount)) => {
            format!("{} ({})", category, amount.format_with_symbol(symbol))
        }
        None => "-".to_string(),
    };

    let lines = vec![
        Line::from(""),
        stat_line("Expenses recorded", summary.expense_count.to_string()),
        stat_line("Total spent", summary.total_spent.format_with_symbol(symbol)),
        stat_line("Top category", top),
        Line::from(""),
        stat_line(
            &format!("Spent in {}", summary.as_of.format("%B %Y")),
            summary.month_spent.format_with_symbol(symbol),
        ),
        stat_line(
            "Burn rate (per day)",
            summary.burn_rate.format_with_symbol(symbol),
        ),
        stat_line(
            "Average daily spend",
            summary.average_daily_spend.format_with_symbol(symbol),
        ),
        Line::from(""),
        Line::from(Span::styled(
            format!("As of {}", format_date(summary.as_of, &app.settings.date_format)),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Analytics ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
