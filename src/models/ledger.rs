//! The ledger state container
//!
//! Holds the three persisted records: the ordered expense list, the budget
//! map and the balance. Everything else is derived from a snapshot of this.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::ids::ExpenseId;
use super::money::Money;

/// Per-category spending limits, keyed by normalized category label
pub type BudgetMap = BTreeMap<String, Money>;

/// Snapshot of all persisted state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Expenses in insertion order
    pub expenses: Vec<Expense>,
    pub budgets: BudgetMap,
    pub balance: Money,
}

impl LedgerState {
    /// Look up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Resolve a 1-based list position to the id shown at that position
    pub fn id_at_position(&self, position: usize) -> Option<ExpenseId> {
        position
            .checked_sub(1)
            .and_then(|i| self.expenses.get(i))
            .map(|e| e.id)
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.budgets.is_empty() && self.balance.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let state = LedgerState::default();
        assert!(state.is_empty());
        assert_eq!(state.balance, Money::zero());
    }

    #[test]
    fn test_id_at_position() {
        let mut state = LedgerState::default();
        let first = Expense::new("Coffee", Money::from_cents(450), "Dining");
        let second = Expense::new("Rent", Money::from_cents(120000), "Rent");
        state.expenses = vec![first.clone(), second.clone()];

        assert_eq!(state.id_at_position(1), Some(first.id));
        assert_eq!(state.id_at_position(2), Some(second.id));
        assert_eq!(state.id_at_position(0), None);
        assert_eq!(state.id_at_position(3), None);
        assert_eq!(state.expense(second.id), Some(&second));
    }
}
