//! Storage layer for hearthbook
//!
//! The engine itself never does I/O; it consumes budgets already loaded
//! into memory and hands new values back for persisting. This module holds
//! the persistence contract ([`BudgetStore`]), a JSON file implementation,
//! an in-memory implementation, and the ordered-fallback combinator wired
//! up at the composition root.

pub mod file;
pub mod file_io;
pub mod memory;

pub use file::JsonFileStore;
pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryStore;

use tracing::warn;

use crate::error::{HearthError, HearthResult};
use crate::models::{BudgetId, MonthlyBudget};

/// Persistence contract for budget records, keyed by user.
///
/// Failures are retrievable values, never panics; callers keep working on
/// their in-memory snapshot and decide whether to retry.
pub trait BudgetStore {
    /// Load all budgets for a user. A user with no saved data yields an
    /// empty collection, not an error.
    fn load_budgets(&self, user_key: &str) -> HearthResult<Vec<MonthlyBudget>>;

    /// Save (insert or replace by id) one budget
    fn save_budget(&self, user_key: &str, budget: &MonthlyBudget) -> HearthResult<()>;

    /// Delete a budget by id. Record deletion lives here, not in the
    /// engine.
    fn delete_budget(&self, user_key: &str, id: BudgetId) -> HearthResult<()>;
}

/// Two stores chained with an ordered fallback policy.
///
/// Reads try the primary and fall back on failure. Writes go to the primary
/// and are mirrored into the fallback so the cache stays warm; a write only
/// fails when both stores reject it.
pub struct FallbackStore<P, F> {
    primary: P,
    fallback: F,
}

impl<P: BudgetStore, F: BudgetStore> FallbackStore<P, F> {
    /// Chain a primary store with a fallback
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: BudgetStore, F: BudgetStore> BudgetStore for FallbackStore<P, F> {
    fn load_budgets(&self, user_key: &str) -> HearthResult<Vec<MonthlyBudget>> {
        match self.primary.load_budgets(user_key) {
            Ok(budgets) => Ok(budgets),
            Err(primary_err) => {
                warn!(user_key, error = %primary_err, "primary store load failed, using fallback");
                self.fallback.load_budgets(user_key)
            }
        }
    }

    fn save_budget(&self, user_key: &str, budget: &MonthlyBudget) -> HearthResult<()> {
        match self.primary.save_budget(user_key, budget) {
            Ok(()) => {
                // Best-effort cache mirror; the primary write already
                // succeeded.
                if let Err(e) = self.fallback.save_budget(user_key, budget) {
                    warn!(user_key, error = %e, "fallback store mirror failed");
                }
                Ok(())
            }
            Err(primary_err) => {
                warn!(user_key, error = %primary_err, "primary store save failed, using fallback");
                self.fallback
                    .save_budget(user_key, budget)
                    .map_err(|fallback_err| {
                        HearthError::Storage(format!(
                            "both stores failed: {}; {}",
                            primary_err, fallback_err
                        ))
                    })
            }
        }
    }

    fn delete_budget(&self, user_key: &str, id: BudgetId) -> HearthResult<()> {
        let primary_result = self.primary.delete_budget(user_key, id);
        // Keep the cache consistent regardless of the primary outcome; a
        // missing cache entry is not an error here.
        let _ = self.fallback.delete_budget(user_key, id);
        primary_result
    }
}
