//! Spending analytics
//!
//! Top category, burn rate and average daily spend, computed against a
//! caller-supplied "today" so results are reproducible.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Expense, Money, Month};

use super::spending::{category_totals, top_category, total_spent};

/// Summary figures shown on the Analytics tab and by `pocket analytics`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub as_of: NaiveDate,
    pub expense_count: usize,
    pub total_spent: Money,
    pub top_category: Option<(String, Money)>,
    pub month_spent: Money,
    pub burn_rate: Money,
    pub average_daily_spend: Money,
}

impl AnalyticsSummary {
    pub fn generate(expenses: &[Expense], today: NaiveDate) -> Self {
        let totals = category_totals(expenses);

        Self {
            as_of: today,
            expense_count: expenses.len(),
            total_spent: total_spent(expenses),
            top_category: top_category(&totals).map(|(c, m)| (c.to_string(), m)),
            month_spent: month_spent(expenses, Month::of(today)),
            burn_rate: burn_rate(expenses, today),
            average_daily_spend: average_daily_spend(expenses, today),
        }
    }
}

/// Total spent within a month
pub fn month_spent(expenses: &[Expense], month: Month) -> Money {
    expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Spend so far this month divided by the day of the month
pub fn burn_rate(expenses: &[Expense], today: NaiveDate) -> Money {
    let spent = month_spent(expenses, Month::of(today));
    divide_rounded(spent, i64::from(today.day()))
}

/// Total spend divided by the days from the earliest expense to today,
/// both ends inclusive
pub fn average_daily_spend(expenses: &[Expense], today: NaiveDate) -> Money {
    let Some(first) = expenses.iter().map(|e| e.date).min() else {
        return Money::zero();
    };

    let days = (today - first).num_days() + 1;
    divide_rounded(total_spent(expenses), days.max(1))
}

fn divide_rounded(amount: Money, divisor: i64) -> Money {
    Money::from_cents((amount.cents() as f64 / divisor as f64).round() as i64)
}
