//! Monthly budget record and derived summary
//!
//! A `MonthlyBudget` exclusively owns its income and expense items. At most
//! one record per (user, month, year) pair is expected, but the model does
//! not hard-enforce it; callers check before creating duplicates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HearthError, HearthResult};

use super::ids::BudgetId;
use super::item::{ExpenseItem, IncomeItem};
use super::money::Money;

/// Default tithe percentage for new budgets
pub const DEFAULT_TITHE_PERCENTAGE: u8 = 10;

/// Default savings percentage for new budgets
pub const DEFAULT_SAVINGS_PERCENTAGE: u8 = 10;

/// A single calendar month of budgeting for one household
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBudget {
    /// Unique identifier
    pub id: BudgetId,

    /// Calendar month, 1-12
    pub month: u32,

    pub year: i32,

    #[serde(default)]
    pub incomes: Vec<IncomeItem>,

    #[serde(default)]
    pub expenses: Vec<ExpenseItem>,

    /// Percentage of income set aside as tithe, 0-100
    pub tithe_percentage: u8,

    /// Percentage of income set aside as savings, 0-100
    pub savings_percentage: u8,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Unknown fields from other writers, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MonthlyBudget {
    /// Create an empty budget for a period: fresh id, no items, default
    /// tithe/savings percentages, both timestamps set to now.
    pub fn empty(month: u32, year: i32) -> HearthResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(HearthError::Validation(format!(
                "month must be 1-12, got {}",
                month
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id: BudgetId::new(),
            month,
            year,
            incomes: Vec::new(),
            expenses: Vec::new(),
            tithe_percentage: DEFAULT_TITHE_PERCENTAGE,
            savings_percentage: DEFAULT_SAVINGS_PERCENTAGE,
            created_at: now,
            updated_at: now,
            extra: serde_json::Map::new(),
        })
    }

    /// "YYYY-MM" key for this budget's period
    pub fn period_key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the record's own invariants
    pub fn validate(&self) -> HearthResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(HearthError::Validation(format!(
                "month must be 1-12, got {}",
                self.month
            )));
        }
        if self.tithe_percentage > 100 {
            return Err(HearthError::Validation(format!(
                "tithe percentage must be 0-100, got {}",
                self.tithe_percentage
            )));
        }
        if self.savings_percentage > 100 {
            return Err(HearthError::Validation(format!(
                "savings percentage must be 0-100, got {}",
                self.savings_percentage
            )));
        }
        Ok(())
    }

    /// One-time migration: fill in the explicit `contributor` field on items
    /// that predate it, using the legacy name-matching heuristic.
    ///
    /// Returns the number of items updated. Items that already carry the
    /// field are left alone, so re-running is a no-op.
    pub fn backfill_contributors(&mut self) -> usize {
        let mut updated = 0;

        for income in &mut self.incomes {
            if income.contributor.is_none() {
                // Income attribution is determined by its per-contributor
                // category; the heuristic is unnecessary here.
                income.contributor = Some(income.category);
                updated += 1;
            }
        }

        for expense in &mut self.expenses {
            if expense.contributor.is_none() {
                expense.contributor = Some(crate::models::Contributor::infer_legacy(
                    &expense.description,
                    &expense.subcategory,
                ));
                updated += 1;
            }
        }

        if updated > 0 {
            self.touch();
        }
        updated
    }
}

/// Derived summary figures for one monthly budget.
///
/// Computed fresh by [`crate::reports::calculate_summary`]; never persisted.
/// `budget_balance` always equals `available_amount` — both names are kept
/// because downstream consumers read either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub tithe_amount: Money,
    pub savings_amount: Money,
    pub available_amount: Money,
    pub budget_balance: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contributor, ExpenseCategory, ExpenseType};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_budget_defaults() {
        let budget = MonthlyBudget::empty(3, 2024).unwrap();
        assert_eq!(budget.month, 3);
        assert_eq!(budget.year, 2024);
        assert!(budget.incomes.is_empty());
        assert!(budget.expenses.is_empty());
        assert_eq!(budget.tithe_percentage, 10);
        assert_eq!(budget.savings_percentage, 10);
        assert_eq!(budget.created_at, budget.updated_at);
    }

    #[test]
    fn test_empty_budget_rejects_bad_month() {
        assert!(MonthlyBudget::empty(0, 2024).is_err());
        assert!(MonthlyBudget::empty(13, 2024).is_err());
    }

    #[test]
    fn test_period_key() {
        let budget = MonthlyBudget::empty(1, 2024).unwrap();
        assert_eq!(budget.period_key(), "2024-01");

        let budget = MonthlyBudget::empty(12, 987).unwrap();
        assert_eq!(budget.period_key(), "0987-12");
    }

    #[test]
    fn test_validate_percentages() {
        let mut budget = MonthlyBudget::empty(1, 2024).unwrap();
        assert!(budget.validate().is_ok());

        budget.tithe_percentage = 101;
        assert!(budget.validate().is_err());
    }

    #[test]
    fn test_backfill_contributors() {
        let mut budget = MonthlyBudget::empty(1, 2024).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

        let mut income = crate::models::IncomeItem::new(
            "Salary",
            Money::from_major(1000),
            Contributor::Alex,
            "Alex salary",
            date,
        );
        income.contributor = None;
        budget.incomes.push(income);

        let mut expense = crate::models::ExpenseItem::new(
            "Mobile plan Sam",
            Money::from_major(40),
            ExpenseCategory::Housing,
            "Mobile plan Sam",
            ExpenseType::NonEssential,
            date,
            Contributor::Sam,
        );
        expense.contributor = None;
        budget.expenses.push(expense);

        assert_eq!(budget.backfill_contributors(), 2);
        assert_eq!(budget.incomes[0].contributor, Some(Contributor::Alex));
        assert_eq!(budget.expenses[0].contributor, Some(Contributor::Sam));

        // Idempotent
        assert_eq!(budget.backfill_contributors(), 0);
    }

    #[test]
    fn test_wire_format_round_trip() {
        let budget = MonthlyBudget::empty(2, 2024).unwrap();
        let json = serde_json::to_value(&budget).unwrap();

        assert_eq!(json["month"], 2);
        assert!(json.get("tithePercentage").is_some());
        assert!(json.get("savingsPercentage").is_some());
        assert!(json.get("createdAt").is_some());

        let back: MonthlyBudget = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, budget.id);
        assert_eq!(back.created_at, budget.created_at);
        assert_eq!(back.updated_at, budget.updated_at);
    }
}
