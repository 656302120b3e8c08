//! Grouped expense and contributor breakdowns
//!
//! Pure partitioning of line items for the reports views. Items are
//! borrowed, never cloned; every item lands in exactly one group and group
//! totals always sum back to the input total.

use std::collections::BTreeMap;

use crate::models::{Contributor, ExpenseCategory, ExpenseItem, ExpenseType, LineItem, Money};

/// One expense category's share of a report
#[derive(Debug, Clone)]
pub struct CategoryBreakdown<'a> {
    pub category: ExpenseCategory,
    pub items: Vec<&'a ExpenseItem>,
    pub total: Money,
    /// Share of the grand total, 0.0 when there is no spending
    pub percentage: f64,
}

/// One classification bucket of a by-type report
#[derive(Debug, Clone, Default)]
pub struct TypeBucket<'a> {
    pub items: Vec<&'a ExpenseItem>,
    pub total: Money,
    /// Share of the grand total, 0.0 when there is no spending
    pub percentage: f64,
}

/// Expenses partitioned by their frozen classification
#[derive(Debug, Clone, Default)]
pub struct TypeBreakdown<'a> {
    pub essential: TypeBucket<'a>,
    pub non_essential: TypeBucket<'a>,
    pub variable: TypeBucket<'a>,
}

/// Partition expenses by category key.
///
/// Groups appear in insertion order of each category's first occurrence;
/// the presentation layer re-sorts if it wants a different order.
pub fn group_expenses_by_category(expenses: &[ExpenseItem]) -> Vec<CategoryBreakdown<'_>> {
    let mut groups: Vec<CategoryBreakdown<'_>> = Vec::new();
    let mut grand_total = Money::zero();

    for expense in expenses {
        grand_total += expense.amount;

        match groups.iter_mut().find(|g| g.category == expense.category) {
            Some(group) => {
                group.items.push(expense);
                group.total += expense.amount;
            }
            None => groups.push(CategoryBreakdown {
                category: expense.category,
                items: vec![expense],
                total: expense.amount,
                percentage: 0.0,
            }),
        }
    }

    for group in &mut groups {
        group.percentage = share_of(group.total, grand_total);
    }
    groups
}

/// Partition expenses into essential / non-essential / variable buckets.
///
/// Partitioning reads each item's frozen `type` field, not the registry, so
/// reclassifying a subcategory never changes past reports.
pub fn group_expenses_by_type(expenses: &[ExpenseItem]) -> TypeBreakdown<'_> {
    let mut breakdown = TypeBreakdown::default();
    let mut grand_total = Money::zero();

    for expense in expenses {
        grand_total += expense.amount;
        let bucket = match expense.expense_type {
            ExpenseType::Essential => &mut breakdown.essential,
            ExpenseType::NonEssential => &mut breakdown.non_essential,
            ExpenseType::Variable => &mut breakdown.variable,
        };
        bucket.items.push(expense);
        bucket.total += expense.amount;
    }

    for bucket in [
        &mut breakdown.essential,
        &mut breakdown.non_essential,
        &mut breakdown.variable,
    ] {
        bucket.percentage = share_of(bucket.total, grand_total);
    }
    breakdown
}

/// Total amounts per contributor bucket.
///
/// Works over incomes or expenses via [`LineItem`]. Attribution uses the
/// item's explicit contributor field, with the legacy name-matching
/// heuristic applying only to records that predate the field. Every bucket
/// is present in the result, zero when unused.
pub fn group_by_contributor<T: LineItem>(items: &[T]) -> BTreeMap<Contributor, Money> {
    let mut totals: BTreeMap<Contributor, Money> = Contributor::all()
        .iter()
        .map(|c| (*c, Money::zero()))
        .collect();

    for item in items {
        *totals.entry(item.contributor()).or_default() += item.amount();
    }
    totals
}

fn share_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.minor() as f64 / total.minor() as f64 * 100.0
    }
}
