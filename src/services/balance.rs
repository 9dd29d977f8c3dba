//! Balance service
//!
//! Absolute set and additive deposit on the user's balance.

use tracing::info;

use crate::audit::EntityType;
use crate::config::BalancePolicy;
use crate::error::PocketResult;
use crate::models::Money;
use crate::reports::remaining_balance;
use crate::storage::Storage;

/// Service for balance management
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current balance
    pub fn show(&self) -> PocketResult<Money> {
        self.storage.balance.get()
    }

    /// Balance left after spending under `policy`
    pub fn remaining(&self, policy: BalancePolicy) -> PocketResult<Money> {
        let balance = self.storage.balance.get()?;
        let expenses = self.storage.expenses.get_all()?;
        Ok(remaining_balance(balance, &expenses, policy))
    }

    /// Overwrite the balance
    pub fn set(&self, value: Money) -> PocketResult<Money> {
        let before = self.storage.balance.get()?;
        self.write(before, value, "set")
    }

    /// Add `amount` to the balance; negative amounts withdraw
    pub fn deposit(&self, amount: Money) -> PocketResult<Money> {
        let before = self.storage.balance.get()?;
        self.write(before, before + amount, "deposit")
    }

    fn write(&self, before: Money, after: Money, action: &str) -> PocketResult<Money> {
        self.storage.balance.set(after)?;
        self.storage.balance.save()?;

        info!(%before, %after, action, "balance updated");
        self.storage.log_update(
            EntityType::Balance,
            "balance",
            Some(action.to_string()),
            &before,
            &after,
            Some(format!("{} -> {}", before, after)),
        )?;

        Ok(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketPaths;
    use crate::models::Expense;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_deposit_accumulates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BalanceService::new(&storage);

        service.deposit(Money::from_cents(50000)).unwrap();
        let balance = service.deposit(Money::from_cents(2550)).unwrap();

        assert_eq!(balance, Money::from_cents(52550));
        assert_eq!(service.show().unwrap(), Money::from_cents(52550));
    }

    #[test]
    fn test_set_overwrites() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BalanceService::new(&storage);

        service.deposit(Money::from_cents(50000)).unwrap();
        service.set(Money::from_cents(-1000)).unwrap();
        assert_eq!(service.show().unwrap(), Money::from_cents(-1000));
        assert_eq!(storage.audit().entry_count().unwrap(), 2);
    }

    #[test]
    fn test_remaining() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .expenses
            .push(Expense::new("Lunch", Money::from_cents(5000), "Dining"))
            .unwrap();
        let service = BalanceService::new(&storage);
        service.set(Money::from_cents(50000)).unwrap();

        assert_eq!(
            service.remaining(BalancePolicy::Decoupled).unwrap(),
            Money::from_cents(45000)
        );
        assert_eq!(
            service.remaining(BalancePolicy::Coupled).unwrap(),
            Money::from_cents(50000)
        );
    }
}
