//! Budget progress bars

use serde::Serialize;

use crate::models::{BudgetMap, Expense, Money};
use crate::reports::{budget_status, BudgetHealth, BudgetStatus};

use super::report::{format_bar, format_percentage};

/// One progress bar per budget entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetBar {
    pub category: String,
    /// "spent / limit"
    pub label: String,
    /// 0.0..=1.0
    pub fill: f64,
    pub percent: f64,
    pub health: BudgetHealth,
    pub remaining: Money,
}

impl BudgetBar {
    fn from_status(status: &BudgetStatus, currency_symbol: &str) -> Self {
        Self {
            category: status.category.clone(),
            label: format!(
                "{} / {}",
                status.spent.format_with_symbol(currency_symbol),
                status.limit.format_with_symbol(currency_symbol)
            ),
            fill: status.fill(),
            percent: status.percent,
            health: status.health,
            remaining: status.remaining(),
        }
    }
}

/// Bars for every budget entry, alphabetical
pub fn budget_bars(expenses: &[Expense], budgets: &BudgetMap, currency_symbol: &str) -> Vec<BudgetBar> {
    budget_status(expenses, budgets)
        .iter()
        .map(|s| BudgetBar::from_status(s, currency_symbol))
        .collect()
}

/// Text rendering for `pocket budget status`
pub fn format_budget_bars(bars: &[BudgetBar], width: usize) -> String {
    if bars.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let name_width = bars.iter().map(|b| b.category.chars().count()).max().unwrap_or(0);
    let label_width = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for bar in bars {
        output.push_str(&format!(
            "{:<name_width$}  {}  {:<label_width$}  {:>4}  {}\n",
            bar.category,
            format_bar(bar.fill, 1.0, width),
            bar.label,
            format_percentage(bar.percent),
            bar.health.label(),
            name_width = name_width,
            label_width = label_width,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_for_yellow_budget() {
        let mut budgets = BudgetMap::new();
        budgets.insert("Dining".into(), Money::from_cents(10000));
        let expenses = vec![Expense::new("Dinner", Money::from_cents(8000), "Dining")];

        let bars = budget_bars(&expenses, &budgets, "$");
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].label, "$80.00 / $100.00");
        assert_eq!(bars[0].fill, 0.8);
        assert_eq!(bars[0].health, BudgetHealth::Yellow);

        let text = format_budget_bars(&bars, 10);
        assert!(text.contains("████████░░"));
        assert!(text.contains("80%"));
        assert!(text.contains("Warning"));
    }

    #[test]
    fn test_overspent_bar_is_full() {
        let mut budgets = BudgetMap::new();
        budgets.insert("Dining".into(), Money::from_cents(5000));
        let expenses = vec![Expense::new("Feast", Money::from_cents(9000), "Dining")];

        let bar = &budget_bars(&expenses, &budgets, "€")[0];
        assert_eq!(bar.fill, 1.0);
        assert_eq!(bar.percent, 100.0);
        assert_eq!(bar.remaining, Money::from_cents(-4000));
        assert_eq!(bar.label, "€90.00 / €50.00");
    }

    #[test]
    fn test_no_budgets() {
        assert_eq!(format_budget_bars(&[], 10), "No budgets set.\n");
    }
}
