//! hearthbook - Household monthly budgeting engine
//!
//! This library provides the core of a household budgeting application:
//! income and expense line items recorded per calendar month, tagged by
//! category/subcategory and contributor, with derived summary figures
//! (totals, tithe, savings, available balance), grouped breakdowns, and
//! month-over-month trends.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution
//! - `error`: Custom error types
//! - `models`: Core data models (budgets, line items, money, ids)
//! - `registry`: The immutable category taxonomy
//! - `services`: Validated budget mutation (the draft boundary)
//! - `reports`: Pure aggregation engine (summaries, breakdowns, trends)
//! - `storage`: The `BudgetStore` contract and its implementations
//!
//! # Example
//!
//! ```rust
//! use hearthbook::registry::CategoryRegistry;
//! use hearthbook::reports::calculate_summary;
//! use hearthbook::services::{EntryService, IncomeDraft};
//! use hearthbook::models::{Contributor, MonthlyBudget};
//!
//! # fn main() -> hearthbook::error::HearthResult<()> {
//! let registry = CategoryRegistry::standard();
//! let service = EntryService::new(&registry);
//!
//! let budget = MonthlyBudget::empty(1, 2024)?;
//! let budget = service.add_income(
//!     &budget,
//!     IncomeDraft {
//!         description: String::new(),
//!         amount: "1000000".into(),
//!         category: Some(Contributor::Alex),
//!         subcategory: "Alex salary".into(),
//!         date: "2024-01-15".into(),
//!     },
//! )?;
//!
//! let summary = calculate_summary(&budget);
//! assert_eq!(summary.budget_balance, summary.available_amount);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{HearthError, HearthResult};
