//! Expense entry form

use chrono::NaiveDate;

use crate::models::{normalize_category, ValidationError};
use crate::services::CreateExpenseInput;

use super::currency::{normalize_currency_input, parse_currency_input};

/// Which field of the expense form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    /// Next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Name,
        }
    }

    /// Previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// Raw expense fields; `date` may be left blank for today
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ExpenseField) -> &str {
        match field {
            ExpenseField::Name => &self.name,
            ExpenseField::Amount => &self.amount,
            ExpenseField::Category => &self.category,
            ExpenseField::Date => &self.date,
        }
    }

    /// Append typed text to a field; the amount only keeps digits and `.`
    pub fn input(&mut self, field: ExpenseField, text: &str) {
        match field {
            ExpenseField::Name => self.name.push_str(text),
            ExpenseField::Amount => {
                let combined = format!("{}{}", self.amount, text);
                self.amount = normalize_currency_input(&combined, false);
            }
            ExpenseField::Category => self.category.push_str(text),
            ExpenseField::Date => self.date.push_str(text),
        }
    }

    pub fn backspace(&mut self, field: ExpenseField) {
        match field {
            ExpenseField::Name => self.name.pop(),
            ExpenseField::Amount => self.amount.pop(),
            ExpenseField::Category => self.category.pop(),
            ExpenseField::Date => self.date.pop(),
        };
    }

    /// Validate every field, reporting the first failure
    pub fn validate(&self) -> Result<CreateExpenseInput, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let amount = parse_currency_input(&self.amount)?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }

        let category = normalize_category(&self.category);
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let raw_date = self.date.trim();
        let date = if raw_date.is_empty() {
            None
        } else {
            let parsed = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(raw_date.to_string()))?;
            Some(parsed)
        };

        Ok(CreateExpenseInput {
            name: name.to_string(),
            amount,
            category,
            date,
        })
    }

    /// Blank every field
    pub fn reset(&mut self) {
        self.name.clear();
        self.amount.clear();
        self.category.clear();
        self.date.clear();
    }
}
