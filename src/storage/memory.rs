//! In-memory budget store
//!
//! Keeps each user's budgets in a `RwLock`-guarded map. Used as the local
//! cache side of a fallback chain and as a test double.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{HearthError, HearthResult};
use crate::models::{BudgetId, MonthlyBudget};

use super::BudgetStore;

/// Budget store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Vec<MonthlyBudget>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetStore for MemoryStore {
    fn load_budgets(&self, user_key: &str) -> HearthResult<Vec<MonthlyBudget>> {
        let data = self
            .data
            .read()
            .map_err(|e| HearthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(user_key).cloned().unwrap_or_default())
    }

    fn save_budget(&self, user_key: &str, budget: &MonthlyBudget) -> HearthResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| HearthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let budgets = data.entry(user_key.to_string()).or_default();
        match budgets.iter_mut().find(|b| b.id == budget.id) {
            Some(existing) => *existing = budget.clone(),
            None => budgets.push(budget.clone()),
        }
        Ok(())
    }

    fn delete_budget(&self, user_key: &str, id: BudgetId) -> HearthResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| HearthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let budgets = data
            .get_mut(user_key)
            .ok_or_else(|| HearthError::budget_not_found(id.to_string()))?;

        let before = budgets.len();
        budgets.retain(|b| b.id != id);
        if budgets.len() == before {
            return Err(HearthError::budget_not_found(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        let budget = MonthlyBudget::empty(5, 2024).unwrap();

        store.save_budget("family", &budget).unwrap();
        let loaded = store.load_budgets("family").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, budget.id);
    }

    #[test]
    fn test_upsert_by_id() {
        let store = MemoryStore::new();
        let mut budget = MonthlyBudget::empty(5, 2024).unwrap();
        store.save_budget("family", &budget).unwrap();

        budget.savings_percentage = 20;
        store.save_budget("family", &budget).unwrap();

        let loaded = store.load_budgets("family").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].savings_percentage, 20);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete_budget("family", BudgetId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_user_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load_budgets("nobody").unwrap().is_empty());
    }
}
