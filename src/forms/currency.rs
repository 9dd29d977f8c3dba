//! Currency input sanitizing

use crate::models::{Money, MoneyParseError, ValidationError};

/// Strip everything except digits and `.` from typed currency input
///
/// With `signed`, a leading `-` is also kept. Applied on every keystroke so
/// the field never holds characters the amount parser would reject.
pub fn normalize_currency_input(raw: &str, signed: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '0'..='9' | '.' => out.push(c),
            '-' if signed && out.is_empty() => out.push(c),
            _ => {}
        }
    }
    out
}

/// Sanitize then parse a currency field
///
/// Every form validates its amount through here, so text pasted on the
/// command line ("1,204.50", "$12") parses the same as typed text. The sign
/// is kept so callers can reject negatives themselves.
pub fn parse_currency_input(raw: &str) -> Result<Money, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }

    let cleaned = normalize_currency_input(raw, true);
    if cleaned.is_empty() {
        return Err(MoneyParseError::InvalidFormat(raw.to_string()).into());
    }
    Ok(Money::parse(&cleaned)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_numeric() {
        assert_eq!(normalize_currency_input("$1,204.50", false), "1204.50");
        assert_eq!(normalize_currency_input("abc", false), "");
        assert_eq!(normalize_currency_input(" 4 . 5 ", false), "4.5");
    }

    #[test]
    fn test_sign_handling() {
        assert_eq!(normalize_currency_input("-12", false), "12");
        assert_eq!(normalize_currency_input("-12", true), "-12");
        assert_eq!(normalize_currency_input("1-2", true), "12");
        assert_eq!(normalize_currency_input("$-5", true), "-5");
    }

    #[test]
    fn test_parse_pasted_text() {
        assert_eq!(parse_currency_input("1,204.50"), Ok(Money::from_cents(120450)));
        assert_eq!(parse_currency_input(" $4.50 "), Ok(Money::from_cents(450)));
        assert_eq!(parse_currency_input("-$20"), Ok(Money::from_cents(-2000)));
    }

    #[test]
    fn test_parse_rejections() {
        assert_eq!(parse_currency_input("  "), Err(ValidationError::EmptyAmount));
        assert!(matches!(
            parse_currency_input("abc"),
            Err(ValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_currency_input("1.2.3"),
            Err(ValidationError::InvalidAmount(_))
        ));
    }
}
