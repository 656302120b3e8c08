//! Service layer for hearthbook
//!
//! The service layer provides validated mutation of budget records on top of
//! the models, keeping draft parsing out of the pure aggregation engine.

pub mod entry;

pub use entry::{month_budget, open_month, EntryService, ExpenseDraft, IncomeDraft};
