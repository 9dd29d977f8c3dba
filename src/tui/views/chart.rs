//! Chart view
//!
//! One bar per category, colored from the category palette, with a legend
//! giving each category's amount and share of total spend.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_percentage, ChartColor};
use crate::tui::app::App;

fn to_color(color: ChartColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Render the chart tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chart = &app.dashboard.chart;

    let block = Block::default()
        .title(" Spending by Category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if chart.is_empty() {
        let text = Paragraph::new("No expenses to chart yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(40)])
        .split(area);

    let symbol = &app.settings.currency_symbol;
    let bars: Vec<Bar> = chart
        .labels
        .iter()
        .zip(&chart.values)
        .zip(&chart.colors)
        .map(|((label, value), color)| {
            Bar::default()
                .value(value.cents().max(0) as u64)
                .label(Line::from(label.as_str()))
                .text_value(value.format_with_symbol(symbol))
                .style(Style::default().fg(to_color(*color)))
                .value_style(Style::default().fg(Color::Black).bg(to_color(*color)))
        })
        .collect();

    let bar_width = chunks[0]
        .width
        .saturating_sub(2)
        .checked_div(chart.len() as u16)
        .unwrap_or(1)
        .saturating_sub(1)
        .clamp(3, 14);

    let bar_chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(bar_chart, chunks[0]);

    render_legend(frame, app, chunks[1]);
}

fn render_legend(frame: &mut Frame, app: &App, area: Rect) {
    let chart = &app.dashboard.chart;
    let symbol = &app.settings.currency_symbol;
    let total = chart.total();

    let mut lines: Vec<Line> = chart
        .labels
        .iter()
        .zip(&chart.values)
        .zip(&chart.colors)
        .map(|((label, value), color)| {
            let share = value.ratio_of(total).unwrap_or(0.0) * 100.0;
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(to_color(*color))),
                Span::styled(format!("{:<14}", label), Style::default().fg(Color::White)),
                Span::raw(format!("{:>12} ", value.format_with_symbol(symbol))),
                Span::styled(format_percentage(share), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(total.format_with_symbol(symbol)),
    ]));

    let block = Block::default()
        .title(" Legend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
