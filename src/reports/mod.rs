//! Aggregation engine for hearthbook
//!
//! Pure, deterministic derivation of every summary and report figure from
//! budget records: no I/O, no mutation of inputs, no hidden state. Invalid
//! input is rejected upstream at the service boundary and never reaches
//! these functions.

pub mod breakdown;
pub mod summary;
pub mod trend;

pub use breakdown::{
    group_by_contributor, group_expenses_by_category, group_expenses_by_type, CategoryBreakdown,
    TypeBreakdown, TypeBucket,
};
pub use summary::calculate_summary;
pub use trend::{monthly_trend, TrendPoint};
