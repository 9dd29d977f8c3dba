//! Reports module for pocket-budget
//!
//! Derived aggregates over the ledger: category totals, budget status,
//! analytics and monthly history. Nothing here is persisted.

pub mod analytics;
pub mod budget_overview;
pub mod history;
pub mod spending;

pub use analytics::{average_daily_spend, burn_rate, month_spent, AnalyticsSummary};
pub use budget_overview::{
    budget_status, over_budget_categories, BudgetHealth, BudgetStatus, WARNING_RATIO,
};
pub use history::{month_summary, monthly_history, MonthSummary};
pub use spending::{category_totals, remaining_balance, top_category, total_spent, CategoryTotals};
