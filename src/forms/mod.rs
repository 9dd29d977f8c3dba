//! Form controllers
//!
//! Raw text fields as typed by the user, validated into typed values before
//! anything reaches the service layer. A failed validation leaves the model
//! untouched; a successful submission is followed by `reset()`.

pub mod amount;
pub mod budget;
pub mod currency;
pub mod expense;

pub use amount::AmountForm;
pub use budget::{BudgetField, BudgetForm};
pub use currency::{normalize_currency_input, parse_currency_input};
pub use expense::{ExpenseField, ExpenseForm};

pub use crate::models::ValidationError;
