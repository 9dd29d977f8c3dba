//! Core data models for pocket-budget
//!
//! This module contains the data structures of the expense/budget domain:
//! expenses, money, budget limits, the balance and calendar months.

pub mod category;
pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod period;
pub mod validation;

pub use category::normalize_category;
pub use expense::Expense;
pub use ids::ExpenseId;
pub use ledger::{BudgetMap, LedgerState};
pub use money::{Money, MoneyParseError};
pub use period::{Month, MonthParseError};
pub use validation::ValidationError;
