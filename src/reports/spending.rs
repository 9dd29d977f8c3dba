//! Spending aggregates
//!
//! Category totals, total spent and the remaining balance. All functions are
//! pure over a slice of expenses and never persist anything.

use std::collections::BTreeMap;

use crate::config::BalancePolicy;
use crate::models::{Expense, Money};

/// Per-category totals, keyed alphabetically
pub type CategoryTotals = BTreeMap<String, Money>;

/// Sum expense amounts grouped by category
///
/// Categories with no expenses are absent. The result does not depend on the
/// order of `expenses`.
pub fn category_totals(expenses: &[Expense]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// Sum of every expense amount
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// What is left to spend
///
/// Under the decoupled policy the balance is a funding figure and spending is
/// subtracted here. Under the coupled policy expenses were already deducted
/// from the balance as they were added.
pub fn remaining_balance(balance: Money, expenses: &[Expense], policy: BalancePolicy) -> Money {
    match policy {
        BalancePolicy::Decoupled => balance - total_spent(expenses),
        BalancePolicy::Coupled => balance,
    }
}

/// Category with the highest total; ties go to the alphabetically first
pub fn top_category(totals: &CategoryTotals) -> Option<(&str, Money)> {
    totals
        .iter()
        .fold(None, |best: Option<(&str, Money)>, (category, total)| match best {
            Some((_, best_total)) if best_total >= *total => best,
            _ => Some((category.as_str(), *total)),
        })
}
