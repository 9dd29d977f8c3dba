//! Budget status report
//!
//! Compares spending against each category limit and classifies the result
//! with a three-step traffic light.

use serde::Serialize;

use crate::models::{BudgetMap, Expense, Money};

use super::spending::category_totals;

/// Ratio at which a budget turns yellow
pub const WARNING_RATIO: f64 = 0.70;

/// Traffic-light health of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    /// Under 70% of the limit
    Green,
    /// 70% up to (not including) the limit
    Yellow,
    /// At or over the limit
    Red,
}

impl BudgetHealth {
    /// Classify a spent/limit ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 1.0 {
            Self::Red
        } else if ratio >= WARNING_RATIO {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    /// Classify exact amounts without going through floating point
    ///
    /// A non-positive limit is red as soon as anything is spent.
    pub fn from_amounts(spent: Money, limit: Money) -> Self {
        if !limit.is_positive() {
            return if spent.is_positive() { Self::Red } else { Self::Green };
        }

        let spent = spent.cents() as i128;
        let limit = limit.cents() as i128;
        if spent >= limit {
            Self::Red
        } else if spent * 100 >= limit * 70 {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "OK",
            Self::Yellow => "Warning",
            Self::Red => "Over",
        }
    }
}

/// Status of one budget entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub spent: Money,
    pub limit: Money,
    /// Unclamped spent/limit
    pub ratio: f64,
    /// Percentage of the limit used, capped at 100
    pub percent: f64,
    pub health: BudgetHealth,
}

impl BudgetStatus {
    fn new(category: String, spent: Money, limit: Money) -> Self {
        let (ratio, percent) = if limit.is_positive() {
            (
                spent.ratio_of(limit).unwrap_or(0.0),
                spent.cents() as f64 * 100.0 / limit.cents() as f64,
            )
        } else if spent.is_positive() {
            (f64::INFINITY, 100.0)
        } else {
            (0.0, 0.0)
        };

        Self {
            category,
            spent,
            limit,
            ratio,
            percent: percent.min(100.0),
            health: BudgetHealth::from_amounts(spent, limit),
        }
    }

    /// Bar fill in 0.0..=1.0
    pub fn fill(&self) -> f64 {
        self.ratio.clamp(0.0, 1.0)
    }

    /// Amount left before the limit is hit (negative when over)
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    pub fn is_over(&self) -> bool {
        self.health == BudgetHealth::Red
    }
}

/// One status per budget entry, alphabetical by category
///
/// Spending is all-time: every recorded expense in the category counts.
pub fn budget_status(expenses: &[Expense], budgets: &BudgetMap) -> Vec<BudgetStatus> {
    let totals = category_totals(expenses);
    budgets
        .iter()
        .map(|(category, limit)| {
            let spent = totals.get(category).copied().unwrap_or_default();
            BudgetStatus::new(category.clone(), spent, *limit)
        })
        .collect()
}

/// Categories whose spending has reached or passed the limit
pub fn over_budget_categories(expenses: &[Expense], budgets: &BudgetMap) -> Vec<String> {
    budget_status(expenses, budgets)
        .into_iter()
        .filter(BudgetStatus::is_over)
        .map(|s| s.category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dining_budget(limit_cents: i64) -> BudgetMap {
        let mut budgets = BudgetMap::new();
        budgets.insert("Dining".to_string(), Money::from_cents(limit_cents));
        budgets
    }

    #[test]
    fn test_health_step_function() {
        assert_eq!(BudgetHealth::from_ratio(0.50), BudgetHealth::Green);
        assert_eq!(BudgetHealth::from_ratio(0.70), BudgetHealth::Yellow);
        assert_eq!(BudgetHealth::from_ratio(0.99), BudgetHealth::Yellow);
        assert_eq!(BudgetHealth::from_ratio(1.00), BudgetHealth::Red);
        assert_eq!(BudgetHealth::from_ratio(1.50), BudgetHealth::Red);
    }

    #[test]
    fn test_health_from_amounts_matches_ratio() {
        let limit = Money::from_cents(10000);
        for (spent, expected) in [
            (5000, BudgetHealth::Green),
            (6999, BudgetHealth::Green),
            (7000, BudgetHealth::Yellow),
            (9900, BudgetHealth::Yellow),
            (10000, BudgetHealth::Red),
            (15000, BudgetHealth::Red),
        ] {
            assert_eq!(
                BudgetHealth::from_amounts(Money::from_cents(spent), limit),
                expected,
                "spent {}",
                spent
            );
        }
    }

    #[test]
    fn test_dining_eighty_percent_is_yellow() {
        let expenses = vec![Expense::new("Dinner", Money::from_cents(8000), "Dining")];
        let status = budget_status(&expenses, &dining_budget(10000));

        assert_eq!(status.len(), 1);
        assert_eq!(status[0].percent, 80.0);
        assert_eq!(status[0].health, BudgetHealth::Yellow);
        assert_eq!(status[0].remaining(), Money::from_cents(2000));
    }

    #[test]
    fn test_dining_at_limit_is_red() {
        let expenses = vec![
            Expense::new("Dinner", Money::from_cents(8000), "Dining"),
            Expense::new("Lunch", Money::from_cents(2000), "Dining"),
        ];
        let status = budget_status(&expenses, &dining_budget(10000));

        assert_eq!(status[0].percent, 100.0);
        assert_eq!(status[0].health, BudgetHealth::Red);
        assert_eq!(over_budget_categories(&expenses, &dining_budget(10000)), vec!["Dining"]);
    }

    #[test]
    fn test_percent_and_fill_are_capped() {
        let expenses = vec![Expense::new("Feast", Money::from_cents(25000), "Dining")];
        let status = &budget_status(&expenses, &dining_budget(10000))[0];

        assert_eq!(status.ratio, 2.5);
        assert_eq!(status.percent, 100.0);
        assert_eq!(status.fill(), 1.0);
        assert!(status.remaining().is_negative());
    }

    #[test]
    fn test_budget_without_expenses() {
        let status = budget_status(&[], &dining_budget(10000));
        assert_eq!(status[0].spent, Money::zero());
        assert_eq!(status[0].health, BudgetHealth::Green);
        assert_eq!(status[0].percent, 0.0);
    }

    #[test]
    fn test_expenses_without_budget_are_ignored() {
        let expenses = vec![Expense::new("Bus", Money::from_cents(275), "Transport")];
        assert!(budget_status(&expenses, &BudgetMap::new()).is_empty());
    }

    #[test]
    fn test_status_is_alphabetical() {
        let mut budgets = BudgetMap::new();
        budgets.insert("Travel".into(), Money::from_cents(100));
        budgets.insert("Books".into(), Money::from_cents(100));
        let categories: Vec<_> = budget_status(&[], &budgets)
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(categories, vec!["Books", "Travel"]);
    }
}
