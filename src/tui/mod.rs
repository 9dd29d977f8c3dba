//! Terminal User Interface module
//!
//! Tabbed ratatui front end: Expenses, Chart, Budgets, Analytics and History,
//! with modal forms for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
