//! Help dialog
//!
//! Shows keyboard shortcuts for the active tab

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Tab};
use crate::tui::layout::centered_rect;

use super::dialog_block;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(help_lines(app))
        .block(dialog_block("Help", Color::Cyan))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), Style::default().fg(Color::Cyan)),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let tab_count = app.tabs().len();
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        key_line(&format!("1-{}", tab_count), "Jump to tab"),
        key_line("Tab / h l", "Next / previous tab"),
        key_line("j/k", "Move selection"),
        key_line("a", "Add expense"),
        key_line("b", "Set balance"),
        key_line("p", "Deposit into balance"),
        key_line("x", "Export expenses"),
        key_line("Esc", "Dismiss notification"),
        Line::from(""),
    ];

    match app.active_tab {
        Tab::Expenses => {
            lines.push(section("Expenses"));
            lines.push(key_line("d", "Delete selected expense"));
        }
        Tab::Budgets => {
            lines.push(section("Budgets"));
            lines.push(key_line("e", "Set budget for selected category"));
            lines.push(key_line("d", "Clear selected budget"));
        }
        Tab::History => {
            lines.push(section("History"));
            lines.push(key_line("j/k", "Choose month"));
        }
        Tab::Chart | Tab::Analytics => {}
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Data: {}", app.paths.base_dir().display()),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
