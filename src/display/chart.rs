//! Category chart projection
//!
//! Turns expenses into the `{labels, values, colors}` triple drawn by the
//! Chart tab, the `pocket chart` command and the export chart sheet.

use serde::Serialize;

use crate::models::{Expense, Money};
use crate::reports::category_totals;

use super::report::format_bar;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ChartColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// "#RRGGBB"
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Fixed colors for common categories
const CATEGORY_PALETTE: &[(&str, ChartColor)] = &[
    ("Bills", ChartColor::rgb(0x4B, 0xC0, 0xC0)),
    ("Dining", ChartColor::rgb(0xFF, 0x63, 0x84)),
    ("Entertainment", ChartColor::rgb(0x99, 0x66, 0xFF)),
    ("Food", ChartColor::rgb(0xFF, 0x63, 0x84)),
    ("Groceries", ChartColor::rgb(0x8B, 0xC3, 0x4A)),
    ("Health", ChartColor::rgb(0x26, 0xA6, 0x9A)),
    ("Rent", ChartColor::rgb(0x36, 0xA2, 0xEB)),
    ("Shopping", ChartColor::rgb(0xFF, 0x9F, 0x40)),
    ("Transport", ChartColor::rgb(0xFF, 0xCE, 0x56)),
    ("Travel", ChartColor::rgb(0x5C, 0x6B, 0xC0)),
    ("Utilities", ChartColor::rgb(0x78, 0x90, 0x9C)),
];

/// Cycled for categories without a fixed color
const FALLBACK_PALETTE: &[ChartColor] = &[
    ChartColor::rgb(0xFF, 0x63, 0x84),
    ChartColor::rgb(0x36, 0xA2, 0xEB),
    ChartColor::rgb(0xFF, 0xCE, 0x56),
    ChartColor::rgb(0x4B, 0xC0, 0xC0),
    ChartColor::rgb(0x99, 0x66, 0xFF),
    ChartColor::rgb(0xFF, 0x9F, 0x40),
    ChartColor::rgb(0xC9, 0xCB, 0xCF),
    ChartColor::rgb(0xE5, 0x73, 0x73),
];

/// Stable color for a category label
pub fn color_for_category(category: &str) -> ChartColor {
    if let Some((_, color)) = CATEGORY_PALETTE.iter().find(|(name, _)| *name == category) {
        return *color;
    }
    let index = (fnv1a(category.as_bytes()) % FALLBACK_PALETTE.len() as u64) as usize;
    FALLBACK_PALETTE[index]
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// Parallel arrays, one entry per category with a nonzero total
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<Money>,
    pub colors: Vec<ChartColor>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn total(&self) -> Money {
        self.values.iter().sum()
    }

    pub fn max_value(&self) -> Money {
        self.values.iter().copied().max().unwrap_or_default()
    }
}

/// Build the chart for a set of expenses, alphabetical by category
pub fn chart_data(expenses: &[Expense]) -> ChartData {
    let mut chart = ChartData::default();
    for (category, total) in category_totals(expenses) {
        if total.is_zero() {
            continue;
        }
        chart.colors.push(color_for_category(&category));
        chart.labels.push(category);
        chart.values.push(total);
    }
    chart
}

/// Text rendering: one bar per category with amount and share
pub fn format_chart_text(chart: &ChartData, currency_symbol: &str, width: usize) -> String {
    if chart.is_empty() {
        return "No expenses to chart.\n".to_string();
    }

    let label_width = chart.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = chart.max_value().as_f64();
    let total = chart.total().as_f64();

    let mut output = String::new();
    for (label, value) in chart.labels.iter().zip(&chart.values) {
        let share = if total > 0.0 {
            value.as_f64() / total * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "{:<label_width$}  {}  {:>12}  {:>5.1}%\n",
            label,
            format_bar(value.as_f64(), max, width),
            value.format_with_symbol(currency_symbol),
            share,
            label_width = label_width,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_data_is_alphabetical_and_parallel() {
        let expenses = vec![
            Expense::new("Rent", Money::from_cents(120000), "Rent"),
            Expense::new("Coffee", Money::from_cents(450), "Dining"),
            Expense::new("Bagel", Money::from_cents(300), "Dining"),
        ];
        let chart = chart_data(&expenses);

        assert_eq!(chart.labels, vec!["Dining", "Rent"]);
        assert_eq!(chart.values, vec![Money::from_cents(750), Money::from_cents(120000)]);
        assert_eq!(chart.colors.len(), 2);
        assert_eq!(chart.total(), Money::from_cents(120750));
    }

    #[test]
    fn test_empty_chart() {
        let chart = chart_data(&[]);
        assert!(chart.is_empty());
        assert_eq!(format_chart_text(&chart, "$", 20), "No expenses to chart.\n");
    }

    #[test]
    fn test_colors_are_deterministic() {
        assert_eq!(color_for_category("Rent").hex(), "#36A2EB");
        assert_eq!(color_for_category("Pet Care"), color_for_category("Pet Care"));

        let unknown = color_for_category("Pet Care");
        assert!(FALLBACK_PALETTE.contains(&unknown));
    }

    #[test]
    fn test_fnv1a_known_values() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_text_rendering() {
        let expenses = vec![
            Expense::new("Coffee", Money::from_cents(450), "Dining"),
            Expense::new("Rent", Money::from_cents(120000), "Rent"),
        ];
        let text = format_chart_text(&chart_data(&expenses), "$", 10);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Dining"));
        assert!(lines[0].contains("$4.50"));
        assert!(lines[1].contains("██████████"));
        assert!(lines[1].contains("$1200.00"));
    }
}
