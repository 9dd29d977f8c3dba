//! Expense repository for JSON storage
//!
//! Manages loading and saving the ordered expense list to expenses.json

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::PocketError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk; a missing or corrupted file loads as empty
    pub fn load(&self) -> Result<(), PocketError> {
        let loaded: Vec<Expense> = read_json_or_default(&self.path);
        debug!(count = loaded.len(), "loaded expenses");

        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *expenses = loaded;
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), PocketError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*expenses)
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, PocketError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses.clone())
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, PocketError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses.iter().find(|e| e.id == id).cloned())
    }

    /// Find an expense whose short id matches `prefix` (with or without "exp-")
    pub fn find_by_short_id(&self, prefix: &str) -> Result<Option<Expense>, PocketError> {
        let prefix = prefix.strip_prefix("exp-").unwrap_or(prefix).to_lowercase();
        if prefix.is_empty() {
            return Ok(None);
        }

        let expenses = self
            .expenses
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses
            .iter()
            .find(|e| e.id.as_uuid().simple().to_string().starts_with(&prefix))
            .cloned())
    }

    /// Append an expense
    pub fn push(&self, expense: Expense) -> Result<(), PocketError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        expenses.push(expense);
        Ok(())
    }

    /// Remove an expense by id, returning it if it existed
    pub fn remove(&self, id: ExpenseId) -> Result<Option<Expense>, PocketError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(expenses
            .iter()
            .position(|e| e.id == id)
            .map(|index| expenses.remove(index)))
    }

    /// Replace the whole list
    pub fn replace_all(&self, list: Vec<Expense>) -> Result<(), PocketError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *expenses = list;
        Ok(())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, PocketError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.push(Expense::new("Rent", Money::from_cents(120000), "Rent"))
            .unwrap();
        repo.push(Expense::new("Coffee", Money::from_cents(450), "Dining"))
            .unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Rent", "Coffee"]);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, repo) = create_test_repo();
        let coffee = Expense::new("Coffee", Money::from_cents(450), "Dining");
        repo.push(coffee.clone()).unwrap();

        assert_eq!(repo.remove(coffee.id).unwrap(), Some(coffee.clone()));
        assert_eq!(repo.remove(coffee.id).unwrap(), None);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, repo) = create_test_repo();
        let coffee = Expense::new("Coffee", Money::from_cents(450), "Dining");
        repo.push(coffee.clone()).unwrap();

        let found = repo.find_by_short_id(&coffee.id.to_string()).unwrap();
        assert_eq!(found, Some(coffee.clone()));
        let found = repo.find_by_short_id(&coffee.id.short()).unwrap();
        assert_eq!(found, Some(coffee));
        assert_eq!(repo.find_by_short_id("").unwrap(), None);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let coffee = Expense::new("Coffee", Money::from_cents(450), "Dining");
        repo.push(coffee.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(coffee.id).unwrap(), Some(coffee));
    }

    #[test]
    fn test_corrupted_file_loads_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("expenses.json"), "[{\"name\": 3").unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
