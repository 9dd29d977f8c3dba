//! Balance repository for JSON storage
//!
//! The balance is a single signed amount in cents stored in balance.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PocketError;
use crate::models::Money;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for the user's balance
pub struct BalanceRepository {
    path: PathBuf,
    balance: RwLock<Money>,
}

impl BalanceRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            balance: RwLock::new(Money::zero()),
        }
    }

    /// Load the balance; a missing or corrupted file loads as zero
    pub fn load(&self) -> Result<(), PocketError> {
        let loaded: Money = read_json_or_default(&self.path);
        self.set(loaded)
    }

    pub fn save(&self) -> Result<(), PocketError> {
        let balance = self.get()?;
        write_json_atomic(&self.path, &balance)
    }

    pub fn get(&self) -> Result<Money, PocketError> {
        let balance = self
            .balance
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(*balance)
    }

    pub fn set(&self, amount: Money) -> Result<(), PocketError> {
        let mut balance = self
            .balance
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *balance = amount;
        Ok(())
    }
}
