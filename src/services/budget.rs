//! Budget service
//!
//! Sets and clears per-category spending limits and reports their status.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{PocketError, PocketResult};
use crate::models::{normalize_category, Money, ValidationError};
use crate::reports::{budget_status, BudgetStatus};
use crate::storage::Storage;

/// Service for budget limits
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the limit for a category
    ///
    /// A negative limit is rejected. A zero limit clears the entry. Returns
    /// the stored limit, or `None` when the entry was cleared.
    pub fn set_limit(&self, category: &str, limit: Money) -> PocketResult<Option<Money>> {
        let category = normalize_category(category);
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        if limit.is_negative() {
            return Err(ValidationError::NegativeLimit.into());
        }

        if limit.is_zero() {
            self.remove(&category)?;
            return Ok(None);
        }

        let previous = self.storage.budgets.set(category.clone(), limit)?;
        self.storage.budgets.save()?;

        info!(%category, %limit, "budget set");
        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Budget,
                category.clone(),
                Some(category.clone()),
                &before,
                &limit,
                Some(format!("{} -> {}", before, limit)),
            )?,
            None => self.storage.log_create(
                EntityType::Budget,
                category.clone(),
                Some(category.clone()),
                &limit,
            )?,
        }

        Ok(Some(limit))
    }

    /// Remove the limit for a category
    pub fn clear(&self, category: &str) -> PocketResult<Money> {
        let category = normalize_category(category);
        self.remove(&category)?
            .ok_or_else(|| PocketError::budget_not_found(category))
    }

    /// Status of every budget, alphabetical
    pub fn status(&self) -> PocketResult<Vec<BudgetStatus>> {
        let expenses = self.storage.expenses.get_all()?;
        let budgets = self.storage.budgets.get_all()?;
        Ok(budget_status(&expenses, &budgets))
    }

    fn remove(&self, category: &str) -> PocketResult<Option<Money>> {
        let removed = self.storage.budgets.remove(category)?;
        if let Some(limit) = removed {
            self.storage.budgets.save()?;
            info!(%category, "budget cleared");
            self.storage.log_delete(
                EntityType::Budget,
                category,
                Some(category.to_string()),
                &limit,
            )?;
        }
        Ok(removed)
    }
}
