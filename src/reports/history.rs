//! Monthly history
//!
//! Groups expenses by calendar month for browsing past spending.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Expense, Money, Month};

use super::spending::{category_totals, CategoryTotals};

/// One month of spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub month: Month,
    pub total: Money,
    pub count: usize,
    pub categories: CategoryTotals,
    /// Expenses in insertion order
    pub expenses: Vec<Expense>,
}

impl MonthSummary {
    fn from_expenses(month: Month, expenses: Vec<Expense>) -> Self {
        Self {
            month,
            total: expenses.iter().map(|e| e.amount).sum(),
            count: expenses.len(),
            categories: category_totals(&expenses),
            expenses,
        }
    }
}

/// Every month that has at least one expense, newest first
pub fn monthly_history(expenses: &[Expense]) -> Vec<MonthSummary> {
    let mut grouped: BTreeMap<Month, Vec<Expense>> = BTreeMap::new();
    for expense in expenses {
        grouped
            .entry(Month::of(expense.date))
            .or_default()
            .push(expense.clone());
    }

    grouped
        .into_iter()
        .rev()
        .map(|(month, expenses)| MonthSummary::from_expenses(month, expenses))
        .collect()
}

/// The summary for a single month, if it has any expenses
pub fn month_summary(expenses: &[Expense], month: Month) -> Option<MonthSummary> {
    let in_month: Vec<Expense> = expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .cloned()
        .collect();

    (!in_month.is_empty()).then(|| MonthSummary::from_expenses(month, in_month))
}
