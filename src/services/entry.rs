//! Entry service
//!
//! Validated construction and mutation of monthly budgets. Drafts arrive
//! from the presentation layer with raw strings for amount and date; this
//! service is the boundary where they are parsed and rejected, so the
//! aggregation engine never sees malformed data.
//!
//! Mutations never touch the caller's snapshot: each operation borrows the
//! current record and returns a new value with `updatedAt` refreshed. The
//! caller is responsible for persisting the new value and for serializing
//! concurrent edits from the same session.

use chrono::NaiveDate;

use crate::error::{HearthError, HearthResult};
use crate::models::{
    Contributor, ExpenseCategory, ExpenseItem, IncomeItem, ItemId, Money, MonthlyBudget,
};
use crate::registry::CategoryRegistry;
use crate::storage::BudgetStore;

/// A user-entered income item, not yet validated
#[derive(Debug, Clone, Default)]
pub struct IncomeDraft {
    pub description: String,
    /// Raw amount string as typed
    pub amount: String,
    pub category: Option<Contributor>,
    pub subcategory: String,
    /// Raw "YYYY-MM-DD" date string as typed
    pub date: String,
}

/// A user-entered expense item, not yet validated
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub description: String,
    /// Raw amount string as typed
    pub amount: String,
    pub category: Option<ExpenseCategory>,
    pub subcategory: String,
    /// Raw "YYYY-MM-DD" date string as typed
    pub date: String,
    /// Explicit attribution selector; `None` falls to the shared bucket
    pub contributor: Option<Contributor>,
}

/// Service for validated budget mutation
pub struct EntryService<'a> {
    registry: &'a CategoryRegistry,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service over the given registry
    pub fn new(registry: &'a CategoryRegistry) -> Self {
        Self { registry }
    }

    /// Validate an income draft and return a new budget with it appended.
    ///
    /// An empty description defaults to the subcategory name. The item's
    /// contributor is the income category itself.
    pub fn add_income(
        &self,
        budget: &MonthlyBudget,
        draft: IncomeDraft,
    ) -> HearthResult<MonthlyBudget> {
        let category = draft
            .category
            .ok_or_else(|| HearthError::Validation("income category is required".into()))?;
        let subcategory = required_subcategory(&draft.subcategory)?;
        let amount = parse_amount(&draft.amount)?;
        let date = parse_date(&draft.date)?;

        let description = default_description(&draft.description, &subcategory);
        let item = IncomeItem::new(description, amount, category, subcategory, date);

        let mut updated = budget.clone();
        updated.incomes.push(item);
        updated.touch();
        Ok(updated)
    }

    /// Validate an expense draft and return a new budget with it appended.
    ///
    /// The item's type is resolved from the registry here and frozen onto
    /// the stored item; later registry changes never reclassify it.
    pub fn add_expense(
        &self,
        budget: &MonthlyBudget,
        draft: ExpenseDraft,
    ) -> HearthResult<MonthlyBudget> {
        let category = draft
            .category
            .ok_or_else(|| HearthError::Validation("expense category is required".into()))?;
        let subcategory = required_subcategory(&draft.subcategory)?;
        let amount = parse_amount(&draft.amount)?;
        let date = parse_date(&draft.date)?;

        let expense_type = self.registry.classify_subcategory(category, &subcategory);
        let contributor = draft.contributor.unwrap_or(Contributor::Shared);
        let description = default_description(&draft.description, &subcategory);

        let item = ExpenseItem::new(
            description,
            amount,
            category,
            subcategory,
            expense_type,
            date,
            contributor,
        );

        let mut updated = budget.clone();
        updated.expenses.push(item);
        updated.touch();
        Ok(updated)
    }

    /// Remove an income item by id
    pub fn remove_income(&self, budget: &MonthlyBudget, id: ItemId) -> HearthResult<MonthlyBudget> {
        let mut updated = budget.clone();
        let before = updated.incomes.len();
        updated.incomes.retain(|item| item.id != id);

        if updated.incomes.len() == before {
            return Err(HearthError::income_not_found(id.to_string()));
        }
        updated.touch();
        Ok(updated)
    }

    /// Remove an expense item by id
    pub fn remove_expense(&self, budget: &MonthlyBudget, id: ItemId) -> HearthResult<MonthlyBudget> {
        let mut updated = budget.clone();
        let before = updated.expenses.len();
        updated.expenses.retain(|item| item.id != id);

        if updated.expenses.len() == before {
            return Err(HearthError::expense_not_found(id.to_string()));
        }
        updated.touch();
        Ok(updated)
    }
}

/// Find the budget for a period in an already-loaded collection
pub fn month_budget(budgets: &[MonthlyBudget], month: u32, year: i32) -> Option<&MonthlyBudget> {
    budgets
        .iter()
        .find(|budget| budget.month == month && budget.year == year)
}

/// Load the budget for a period, creating a fresh empty record when the
/// period has none.
///
/// The new record is not saved here; persisting it is the caller's step
/// after the first mutation succeeds.
pub fn open_month(
    store: &dyn BudgetStore,
    user_key: &str,
    month: u32,
    year: i32,
) -> HearthResult<MonthlyBudget> {
    let budgets = store.load_budgets(user_key)?;
    match month_budget(&budgets, month, year) {
        Some(existing) => Ok(existing.clone()),
        None => MonthlyBudget::empty(month, year),
    }
}

fn required_subcategory(raw: &str) -> HearthResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HearthError::Validation("subcategory is required".into()));
    }
    Ok(trimmed.to_string())
}

fn parse_amount(raw: &str) -> HearthResult<Money> {
    let amount = Money::parse(raw)
        .map_err(|e| HearthError::Validation(format!("invalid amount: {}", e)))?;
    if amount.is_negative() {
        return Err(HearthError::Validation(format!(
            "amount cannot be negative: {}",
            amount
        )));
    }
    Ok(amount)
}

fn parse_date(raw: &str) -> HearthResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| HearthError::Validation(format!("invalid date: {}", raw)))
}

fn default_description(description: &str, subcategory: &str) -> String {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        subcategory.to_string()
    } else {
        trimmed.to_string()
    }
}
