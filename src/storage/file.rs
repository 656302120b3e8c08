//! JSON file budget store
//!
//! One JSON document per user key under a data directory, written
//! atomically. Budgets in a document are kept newest-period-first, matching
//! how previously saved records were ordered.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HearthError, HearthResult};
use crate::models::{BudgetId, MonthlyBudget};

use super::file_io::{read_json, write_json_atomic};
use super::BudgetStore;

/// On-disk document shape for one user's budgets
#[derive(Debug, Default, Serialize, Deserialize)]
struct BudgetDocument {
    budgets: Vec<MonthlyBudget>,
}

/// Budget store backed by JSON files
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn user_file(&self, user_key: &str) -> HearthResult<PathBuf> {
        // User keys become file names; anything path-like is rejected
        // rather than escaping the data directory.
        if user_key.is_empty()
            || user_key.contains('/')
            || user_key.contains('\\')
            || user_key.contains("..")
        {
            return Err(HearthError::Validation(format!(
                "invalid user key: {:?}",
                user_key
            )));
        }
        Ok(self.dir.join(format!("{}.json", user_key)))
    }

    fn read_document(&self, user_key: &str) -> HearthResult<BudgetDocument> {
        read_json(self.user_file(user_key)?)
    }

    fn write_document(&self, user_key: &str, mut document: BudgetDocument) -> HearthResult<()> {
        document
            .budgets
            .sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
        write_json_atomic(self.user_file(user_key)?, &document)
    }
}

impl BudgetStore for JsonFileStore {
    fn load_budgets(&self, user_key: &str) -> HearthResult<Vec<MonthlyBudget>> {
        let document = self.read_document(user_key)?;
        debug!(user_key, count = document.budgets.len(), "loaded budgets");
        Ok(document.budgets)
    }

    fn save_budget(&self, user_key: &str, budget: &MonthlyBudget) -> HearthResult<()> {
        let mut document = self.read_document(user_key)?;

        match document.budgets.iter_mut().find(|b| b.id == budget.id) {
            Some(existing) => *existing = budget.clone(),
            None => document.budgets.push(budget.clone()),
        }

        self.write_document(user_key, document)?;
        debug!(user_key, budget = %budget.id, "saved budget");
        Ok(())
    }

    fn delete_budget(&self, user_key: &str, id: BudgetId) -> HearthResult<()> {
        let mut document = self.read_document(user_key)?;
        let before = document.budgets.len();
        document.budgets.retain(|b| b.id != id);

        if document.budgets.len() == before {
            return Err(HearthError::budget_not_found(id.to_string()));
        }
        self.write_document(user_key, document)
    }
}
