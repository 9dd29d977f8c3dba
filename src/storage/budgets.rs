//! Budget repository for JSON storage
//!
//! Persists the category -> limit map to budgets.json

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::PocketError;
use crate::models::{BudgetMap, Money};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for per-category budget limits
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<BudgetMap>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(BudgetMap::new()),
        }
    }

    /// Load budgets from disk; a missing or corrupted file loads as empty
    pub fn load(&self) -> Result<(), PocketError> {
        let loaded: BudgetMap = read_json_or_default(&self.path);
        debug!(count = loaded.len(), "loaded budgets");

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *budgets = loaded;
        Ok(())
    }

    pub fn save(&self) -> Result<(), PocketError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*budgets)
    }

    pub fn get_all(&self) -> Result<BudgetMap, PocketError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.clone())
    }

    /// Get the limit for a category
    pub fn get(&self, category: &str) -> Result<Option<Money>, PocketError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.get(category).copied())
    }

    /// Set the limit for a category, returning the previous limit
    pub fn set(&self, category: String, limit: Money) -> Result<Option<Money>, PocketError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(budgets.insert(category, limit))
    }

    /// Remove the limit for a category, returning it if one was set
    pub fn remove(&self, category: &str) -> Result<Option<Money>, PocketError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(budgets.remove(category))
    }

    pub fn replace_all(&self, map: BudgetMap) -> Result<(), PocketError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *budgets = map;
        Ok(())
    }
}
