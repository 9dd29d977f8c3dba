//! Budgets view
//!
//! A progress gauge per budgeted category, colored by health.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::reports::BudgetHealth;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

const GAUGE_HEIGHT: u16 = 3;

pub fn health_color(health: BudgetHealth) -> Color {
    match health {
        BudgetHealth::Green => Color::Green,
        BudgetHealth::Yellow => Color::Yellow,
        BudgetHealth::Red => Color::Red,
    }
}

/// Render the budgets tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    render_header(frame, app, layout.header);
    render_gauges(frame, app, layout.content);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let over = &app.dashboard.over_budget;
    let line = if over.is_empty() {
        Line::from(Span::styled(
            "All categories within budget",
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(vec![
            Span::styled("Over budget: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(over.join(", "), Style::default().fg(Color::Red)),
        ])
    };

    let block = Block::default()
        .title(" Budgets  e:Set  d:Clear ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_gauges(frame: &mut Frame, app: &App, area: Rect) {
    let bars = &app.dashboard.bars;
    if bars.is_empty() {
        let text = Paragraph::new("No budgets set. Press 'e' to add one.")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let visible = ((area.height / GAUGE_HEIGHT) as usize).max(1);
    let offset = (app.selected_budget + 1).saturating_sub(visible);
    let shown = &bars[offset..bars.len().min(offset + visible)];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            shown
                .iter()
                .map(|_| Constraint::Length(GAUGE_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    let symbol = &app.settings.currency_symbol;
    for (i, bar) in shown.iter().enumerate() {
        let selected = offset + i == app.selected_budget;
        let color = health_color(bar.health);

        let title_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let remaining = if bar.remaining.is_negative() {
            format!(
                "{} over",
                bar.remaining.abs().format_with_symbol(symbol)
            )
        } else {
            format!("{} left", bar.remaining.format_with_symbol(symbol))
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", bar.category), title_style))
            .title_bottom(Line::from(format!(" {} ", remaining)).right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if selected { Color::Cyan } else { Color::DarkGray }));

        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .ratio(bar.fill.clamp(0.0, 1.0))
            .label(format!(
                "{}  {:.0}%  {}",
                bar.label,
                bar.percent,
                bar.health.label()
            ));

        frame.render_widget(gauge, chunks[i]);
    }
}
