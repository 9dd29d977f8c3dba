//! Expense model
//!
//! An expense is a single recorded outflow. Expenses are created on form
//! submission, deleted by id, and never edited in place.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::category::normalize_category;
use super::ids::ExpenseId;
use super::money::Money;
use super::validation::ValidationError;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Assigned at creation; older records without one get a fresh id on load
    #[serde(default)]
    pub id: ExpenseId,

    pub name: String,

    /// Always positive
    pub amount: Money,

    pub category: String,

    #[serde(default = "today")]
    pub date: NaiveDate,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Expense {
    /// Create a new expense dated today
    pub fn new(name: impl Into<String>, amount: Money, category: impl AsRef<str>) -> Self {
        Self::on(name, amount, category, today())
    }

    /// Create a new expense on a specific date
    pub fn on(
        name: impl Into<String>,
        amount: Money,
        category: impl AsRef<str>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into().trim().to_string(),
            amount,
            category: normalize_category(category.as_ref()),
            date,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(())
    }
}
