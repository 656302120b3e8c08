//! Core data models for hearthbook
//!
//! This module contains the data structures that represent the budgeting
//! domain: monthly budgets, income and expense line items, category keys,
//! money, and ids.

pub mod budget;
pub mod category;
pub mod ids;
pub mod item;
pub mod money;

pub use budget::{
    BudgetSummary, MonthlyBudget, DEFAULT_SAVINGS_PERCENTAGE, DEFAULT_TITHE_PERCENTAGE,
};
pub use category::{Contributor, ExpenseCategory, ExpenseType};
pub use ids::{BudgetId, ItemId};
pub use item::{ExpenseItem, IncomeItem, LineItem};
pub use money::Money;
