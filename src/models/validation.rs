//! Validation failures shared by the form layer and the services
//!
//! A validation failure rejects the action before any state is touched.

use thiserror::Error;

use super::money::MoneyParseError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    EmptyName,

    #[error("Category is required")]
    EmptyCategory,

    #[error("Amount is required")]
    EmptyAmount,

    #[error("{0}")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Budget limit cannot be negative")]
    NegativeLimit,

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl From<MoneyParseError> for ValidationError {
    fn from(err: MoneyParseError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}
