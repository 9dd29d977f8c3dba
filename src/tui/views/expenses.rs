//! Expenses view
//!
//! The expense list in insertion order. The highlighted row is the one
//! `d` deletes.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::config::BalancePolicy;
use crate::display::truncate;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the expenses tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    render_header(frame, app, layout.header);
    render_table(frame, app, layout.content);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = &app.settings.currency_symbol;
    let dashboard = &app.dashboard;

    let policy = match dashboard.policy {
        BalancePolicy::Decoupled => "remaining = balance - spent",
        BalancePolicy::Coupled => "expenses deduct from balance",
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} expense(s)", dashboard.rows.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("total {}", dashboard.total_spent.format_with_symbol(symbol)),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(format!("({})", policy), Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(" Expenses ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.dashboard.rows.is_empty() {
        let text = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(4),  // Position
        Constraint::Length(12), // Date
        Constraint::Min(16),    // Name
        Constraint::Length(16), // Category
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from("Date").style(bold),
        Cell::from("Name").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = app
        .dashboard
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.position.to_string()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.date.clone()),
                Cell::from(truncate(&row.name, 30)),
                Cell::from(truncate(&row.category, 16)),
                Cell::from(row.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_expense));

    frame.render_stateful_widget(table, area, &mut state);
}
