//! Single-amount form used for setting the balance and recording deposits

use crate::models::{Money, ValidationError};

use super::currency::{normalize_currency_input, parse_currency_input};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountForm {
    pub amount: String,
}

impl AmountForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append typed text, keeping only characters valid in a signed amount
    pub fn input(&mut self, text: &str) {
        let combined = format!("{}{}", self.amount, text);
        self.amount = normalize_currency_input(&combined, true);
    }

    pub fn backspace(&mut self) {
        self.amount.pop();
    }

    /// Parse the field; any amount including zero and negatives is accepted
    pub fn validate(&self) -> Result<Money, ValidationError> {
        parse_currency_input(&self.amount)
    }

    pub fn reset(&mut self) {
        self.amount.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut form = AmountForm::new();
        assert_eq!(form.validate(), Err(ValidationError::EmptyAmount));

        form.input("500");
        assert_eq!(form.validate(), Ok(Money::from_cents(50000)));

        form.reset();
        form.input("-25.5");
        assert_eq!(form.validate(), Ok(Money::from_cents(-2550)));
    }

    #[test]
    fn test_input_is_sanitized() {
        let mut form = AmountForm::new();
        form.input("$1");
        form.input("x2");
        form.input(".");
        form.input("5");
        assert_eq!(form.amount, "12.5");

        form.backspace();
        assert_eq!(form.amount, "12.");
    }

    #[test]
    fn test_pasted_amount_is_cleaned() {
        let form = AmountForm {
            amount: "$1,000".to_string(),
        };
        assert_eq!(form.validate(), Ok(Money::from_cents(100000)));
    }

    #[test]
    fn test_lone_dot_is_invalid() {
        let mut form = AmountForm::new();
        form.input(".");
        assert!(matches!(form.validate(), Err(ValidationError::InvalidAmount(_))));
    }

    #[test]
    fn test_reset_blanks() {
        let mut form = AmountForm::new();
        form.input("10");
        form.reset();
        assert_eq!(form, AmountForm::default());
    }
}
