//! Budget limit form

use crate::models::{normalize_category, Money, ValidationError};

use super::currency::{normalize_currency_input, parse_currency_input};

/// Which field of the budget form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetField {
    #[default]
    Category,
    Limit,
}

impl BudgetField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Limit,
            Self::Limit => Self::Category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: String,
    pub limit: String,
}

impl BudgetForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append typed text to a field; the limit only keeps digits and `.`
    pub fn input(&mut self, field: BudgetField, text: &str) {
        match field {
            BudgetField::Category => self.category.push_str(text),
            BudgetField::Limit => {
                let combined = format!("{}{}", self.limit, text);
                self.limit = normalize_currency_input(&combined, false);
            }
        }
    }

    pub fn backspace(&mut self, field: BudgetField) {
        match field {
            BudgetField::Category => self.category.pop(),
            BudgetField::Limit => self.limit.pop(),
        };
    }

    /// Validate into a normalized category and a non-negative limit
    pub fn validate(&self) -> Result<(String, Money), ValidationError> {
        let category = normalize_category(&self.category);
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let limit = parse_currency_input(&self.limit)?;
        if limit.is_negative() {
            return Err(ValidationError::NegativeLimit);
        }

        Ok((category, limit))
    }

    pub fn reset(&mut self) {
        self.category.clear();
        self.limit.clear();
    }
}
