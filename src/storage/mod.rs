//! Storage layer for pocket-budget
//!
//! Three independent JSON records (expenses, budgets, balance) with atomic
//! writes. Each record is read leniently: a missing or malformed file loads
//! as its empty default rather than failing startup.

pub mod balance;
pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use balance::BalanceRepository;
pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, read_json_or_default, write_json_atomic};

use serde::Serialize;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PocketPaths;
use crate::error::PocketError;
use crate::models::LedgerState;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PocketPaths,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
    pub balance: BalanceRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PocketPaths) -> Result<Self, PocketError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            balance: BalanceRepository::new(paths.balance_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PocketError> {
        self.expenses.load()?;
        self.budgets.load()?;
        self.balance.load()?;
        debug!(base = %self.paths.base_dir().display(), "storage loaded");
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PocketError> {
        self.expenses.save()?;
        self.budgets.save()?;
        self.balance.save()?;
        Ok(())
    }

    /// Copy of everything currently held in memory
    pub fn snapshot(&self) -> Result<LedgerState, PocketError> {
        Ok(LedgerState {
            expenses: self.expenses.get_all()?,
            budgets: self.budgets.get_all()?,
            balance: self.balance.get()?,
        })
    }

    /// Replace all in-memory state and persist it
    pub fn replace(&self, state: LedgerState) -> Result<(), PocketError> {
        self.expenses.replace_all(state.expenses)?;
        self.budgets.replace_all(state.budgets)?;
        self.balance.set(state.balance)?;
        self.save_all()
    }

    /// The audit log
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PocketError> {
        self.write_audit(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), PocketError> {
        self.write_audit(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a deletion in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), PocketError> {
        self.write_audit(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    // The data write already succeeded by the time we get here; a failing
    // audit append is reported but does not undo it.
    fn write_audit(&self, entry: AuditEntry) -> Result<(), PocketError> {
        if let Err(e) = self.audit.log(&entry) {
            warn!(error = %e, "failed to append audit entry");
        }
        Ok(())
    }

    /// Check if storage has been initialized (settings file written)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage();
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_replace_and_reload() {
        let (temp_dir, storage) = create_storage();

        let mut state = LedgerState::default();
        state
            .expenses
            .push(Expense::new("Coffee", Money::from_cents(450), "Dining"));
        state.budgets.insert("Dining".into(), Money::from_cents(5000));
        state.balance = Money::from_cents(100000);
        storage.replace(state.clone()).unwrap();

        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.snapshot().unwrap(), state);
    }

    #[test]
    fn test_each_record_recovers_independently() {
        let (temp_dir, storage) = create_storage();
        storage.balance.set(Money::from_cents(2500)).unwrap();
        storage.save_all().unwrap();

        std::fs::write(temp_dir.path().join("data").join("expenses.json"), "{{{").unwrap();

        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();

        let state = reopened.snapshot().unwrap();
        assert!(state.expenses.is_empty());
        assert_eq!(state.balance, Money::from_cents(2500));
    }

    #[test]
    fn test_audit_helpers_append() {
        let (_temp_dir, storage) = create_storage();
        let expense = Expense::new("Coffee", Money::from_cents(450), "Dining");
        storage
            .log_create(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.name.clone()),
                &expense,
            )
            .unwrap();
        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }
}
