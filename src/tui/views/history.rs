//! History view
//!
//! Months with spending on the left, the selected month's breakdown on the
//! right.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::{format_date, truncate};
use crate::tui::app::App;
use crate::tui::layout::SplitLayout;

/// Render the history tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let history = &app.dashboard.history;
    if history.is_empty() {
        let block = Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let text = Paragraph::new("No spending history yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let layout = SplitLayout::new(area);
    render_months(frame, app, layout.list);
    render_detail(frame, app, layout.detail);
}

fn render_months(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = &app.settings.currency_symbol;
    let items: Vec<ListItem> = app
        .dashboard
        .history
        .iter()
        .map(|month| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", month.month), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>12}", month.total.format_with_symbol(symbol)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!(" ({})", month.count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Months ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_month));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(month) = app.dashboard.history.get(app.selected_month) else {
        return;
    };
    let symbol = &app.settings.currency_symbol;
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("By category", heading))];
    for (category, total) in &month.categories {
        lines.push(Line::from(format!(
            "  {:<16}{:>12}",
            truncate(category, 16),
            total.format_with_symbol(symbol)
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Expenses", heading)));
    for expense in &month.expenses {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", format_date(expense.date, &app.settings.date_format)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!("{:<20}", truncate(&expense.name, 20))),
            Span::styled(
                format!("{:>12}", expense.amount.format_with_symbol(symbol)),
                Style::default().fg(Color::Red),
            ),
        ]));
    }

    let block = Block::default()
        .title(format!(
            " {}: {} across {} expense(s) ",
            month.month,
            month.total.format_with_symbol(symbol),
            month.count
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
