//! TUI Views module
//!
//! One view per tab, plus the tab bar and status bar.

pub mod analytics;
pub mod budgets;
pub mod chart;
pub mod expenses;
pub mod history;
pub mod status_bar;
pub mod tabs;

use ratatui::Frame;

use super::app::{ActiveDialog, App, Tab};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    tabs::render(frame, app, layout.tabs);

    match app.active_tab {
        Tab::Expenses => expenses::render(frame, app, layout.main),
        Tab::Chart => chart::render(frame, app, layout.main),
        Tab::Budgets => budgets::render(frame, app, layout.main),
        Tab::Analytics => analytics::render(frame, app, layout.main),
        Tab::History => history::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = top_right_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Confirm(action) => dialogs::confirm::render(frame, &action.message()),
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::Amount(mode) => dialogs::amount::render(frame, app, *mode),
        ActiveDialog::Budget => dialogs::budget::render(frame, app),
        ActiveDialog::None => {}
    }
}
