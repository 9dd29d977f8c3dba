//! Display formatting for terminal output
//!
//! Pure projections of a ledger snapshot (rows, chart, budget bars,
//! dashboard) and their text renderings for the CLI.

pub mod budget;
pub mod chart;
pub mod dashboard;
pub mod expense;
pub mod report;
pub mod summary;

pub use budget::{budget_bars, format_budget_bars, BudgetBar};
pub use chart::{chart_data, color_for_category, format_chart_text, ChartColor, ChartData};
pub use dashboard::Dashboard;
pub use expense::{expense_rows, format_expense_table, ExpenseRow};
pub use report::{format_bar, format_date, format_percentage, separator, truncate};
pub use summary::{format_analytics, format_history_overview, format_month_detail};
