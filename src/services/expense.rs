//! Expense service
//!
//! Adds and removes expenses, applying the configured balance policy and
//! writing an audit entry for every change.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::audit::EntityType;
use crate::config::BalancePolicy;
use crate::error::PocketResult;
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Input for creating an expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub name: String,
    pub amount: Money,
    pub category: String,
    /// Defaults to today
    pub date: Option<NaiveDate>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    policy: BalancePolicy,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage, policy: BalancePolicy) -> Self {
        Self { storage, policy }
    }

    /// Record a new expense
    ///
    /// Rejects a blank name, a non-positive amount or an empty category
    /// without touching any state. Under the coupled policy a failed write
    /// of either file leaves both the list and the balance as they were.
    pub fn add(&self, input: CreateExpenseInput) -> PocketResult<Expense> {
        let expense = match input.date {
            Some(date) => Expense::on(input.name, input.amount, &input.category, date),
            None => Expense::new(input.name, input.amount, &input.category),
        };
        expense.validate()?;

        self.storage.expenses.push(expense.clone())?;
        let balance_before = self.apply_policy(-expense.amount)?;
        if let Err(err) = self.persist(balance_before.is_some()) {
            self.storage.expenses.remove(expense.id)?;
            self.roll_back(balance_before)?;
            return Err(err);
        }
        if let Some(before) = balance_before {
            self.log_balance_change(before, &expense)?;
        }

        info!(id = %expense.id, category = %expense.category, amount = %expense.amount, "expense added");
        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Remove an expense by id
    ///
    /// An unknown id is a no-op and returns `Ok(None)`.
    pub fn remove(&self, id: ExpenseId) -> PocketResult<Option<Expense>> {
        let previous = self.storage.expenses.get_all()?;
        let Some(expense) = self.storage.expenses.remove(id)? else {
            debug!(%id, "remove requested for unknown expense");
            return Ok(None);
        };
        let balance_before = self.apply_policy(expense.amount)?;
        if let Err(err) = self.persist(balance_before.is_some()) {
            self.storage.expenses.replace_all(previous)?;
            self.roll_back(balance_before)?;
            return Err(err);
        }
        if let Some(before) = balance_before {
            self.log_balance_change(before, &expense)?;
        }

        info!(id = %expense.id, "expense removed");
        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        Ok(Some(expense))
    }

    /// Resolve user input to an expense id
    ///
    /// Accepts a 1-based list position, a full id, or a short id prefix as
    /// shown by `pocket expense list`.
    pub fn resolve(&self, identifier: &str) -> PocketResult<Option<ExpenseId>> {
        let identifier = identifier.trim();

        if let Ok(position) = identifier.parse::<usize>() {
            let expenses = self.storage.expenses.get_all()?;
            if let Some(expense) = position.checked_sub(1).and_then(|i| expenses.get(i)) {
                return Ok(Some(expense.id));
            }
        }

        if let Ok(id) = identifier.parse::<ExpenseId>() {
            if self.storage.expenses.get(id)?.is_some() {
                return Ok(Some(id));
            }
        }

        Ok(self
            .storage
            .expenses
            .find_by_short_id(identifier)?
            .map(|e| e.id))
    }

    /// All expenses in insertion order
    pub fn list(&self) -> PocketResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    pub fn count(&self) -> PocketResult<usize> {
        self.storage.expenses.count()
    }

    /// Apply `delta` to the in-memory balance under the coupled policy,
    /// returning the previous balance when it changed
    fn apply_policy(&self, delta: Money) -> PocketResult<Option<Money>> {
        if self.policy != BalancePolicy::Coupled {
            return Ok(None);
        }
        let before = self.storage.balance.get()?;
        self.storage.balance.set(before + delta)?;
        Ok(Some(before))
    }

    /// Write the expense list, and the balance when it moved
    fn persist(&self, balance_changed: bool) -> PocketResult<()> {
        self.storage.expenses.save()?;
        if balance_changed {
            self.storage.balance.save()?;
        }
        Ok(())
    }

    /// Restore the balance after a failed write and rewrite what reached disk
    fn roll_back(&self, balance_before: Option<Money>) -> PocketResult<()> {
        if let Some(before) = balance_before {
            self.storage.balance.set(before)?;
        }
        if let Err(err) = self.storage.expenses.save() {
            warn!(error = %err, "could not restore expenses after a failed write");
        }
        Ok(())
    }

    fn log_balance_change(&self, before: Money, expense: &Expense) -> PocketResult<()> {
        let after = self.storage.balance.get()?;
        self.storage.log_update(
            EntityType::Balance,
            "balance",
            Some(expense.name.clone()),
            &before,
            &after,
            Some(format!("{} -> {}", before, after)),
        )
    }
}
