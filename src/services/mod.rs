//! Service layer for pocket-budget
//!
//! The service layer applies validation and the balance policy on top of the
//! storage layer, persists after every change and writes the audit log.

pub mod balance;
pub mod budget;
pub mod expense;

pub use balance::BalanceService;
pub use budget::BudgetService;
pub use expense::{CreateExpenseInput, ExpenseService};
