//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod activity;
pub mod balance;
pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

pub use activity::handle_activity_command;
pub use balance::{handle_balance_command, BalanceCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_analytics_command, handle_chart_command, handle_history_command};
