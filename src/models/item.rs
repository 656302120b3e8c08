//! Income and expense line items
//!
//! Items are owned by their monthly budget (deleting the budget deletes
//! them) and reference the category registry only by key. Wire field names
//! follow the persisted record format; unknown fields from older or newer
//! writers are kept and written back unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{Contributor, ExpenseCategory, ExpenseType};
use super::ids::ItemId;
use super::money::Money;

/// An income line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeItem {
    /// Unique within the owning budget
    pub id: ItemId,

    /// Free-text description; defaults to the subcategory name at entry
    pub description: String,

    /// Non-negative amount
    pub amount: Money,

    /// Income categories are per-contributor
    pub category: Contributor,

    /// Free text; usually one of the category's configured subcategories
    pub subcategory: String,

    /// Date the income was received
    pub date: NaiveDate,

    /// Explicit attribution bucket. Absent on records saved before the
    /// field existed; those fall back to the legacy heuristic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Contributor>,

    /// Unknown fields from other writers, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl IncomeItem {
    /// Create a new income item with a fresh id.
    ///
    /// Income attribution comes straight from the per-contributor category.
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Contributor,
        subcategory: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ItemId::new(),
            description: description.into(),
            amount,
            category,
            subcategory: subcategory.into(),
            date,
            contributor: Some(category),
            extra: serde_json::Map::new(),
        }
    }
}

/// An expense line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    /// Unique within the owning budget
    pub id: ItemId,

    /// Free-text description; defaults to the subcategory name at entry
    pub description: String,

    /// Non-negative amount
    pub amount: Money,

    pub category: ExpenseCategory,

    /// Free text; unknown names classify as variable
    pub subcategory: String,

    /// Classification resolved from the registry when the item was created
    /// and frozen here. Never re-derived for reporting.
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,

    /// Date the expense occurred
    pub date: NaiveDate,

    /// Explicit attribution bucket, chosen at entry time. Absent on records
    /// saved before the field existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Contributor>,

    /// Unknown fields from other writers, passed through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExpenseItem {
    /// Create a new expense item with a fresh id and a frozen type
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        subcategory: impl Into<String>,
        expense_type: ExpenseType,
        date: NaiveDate,
        contributor: Contributor,
    ) -> Self {
        Self {
            id: ItemId::new(),
            description: description.into(),
            amount,
            category,
            subcategory: subcategory.into(),
            expense_type,
            date,
            contributor: Some(contributor),
            extra: serde_json::Map::new(),
        }
    }
}

/// Common surface of income and expense items for the aggregation engine.
///
/// Per-contributor grouping works over either item kind through this trait.
pub trait LineItem {
    fn amount(&self) -> Money;

    /// The item's effective attribution bucket: the explicit field when
    /// present, otherwise the legacy name-matching heuristic.
    fn contributor(&self) -> Contributor;
}

impl LineItem for IncomeItem {
    fn amount(&self) -> Money {
        self.amount
    }

    fn contributor(&self) -> Contributor {
        self.contributor
            .unwrap_or_else(|| Contributor::infer_legacy(&self.description, &self.subcategory))
    }
}

impl LineItem for ExpenseItem {
    fn amount(&self) -> Money {
        self.amount
    }

    fn contributor(&self) -> Contributor {
        self.contributor
            .unwrap_or_else(|| Contributor::infer_legacy(&self.description, &self.subcategory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_income_contributor_from_category() {
        let income = IncomeItem::new(
            "Salary",
            Money::from_major(1000),
            Contributor::Alex,
            "Alex salary",
            date(2024, 1, 15),
        );
        assert_eq!(income.contributor, Some(Contributor::Alex));
        assert_eq!(LineItem::contributor(&income), Contributor::Alex);
    }

    #[test]
    fn test_legacy_item_falls_back_to_heuristic() {
        let mut expense = ExpenseItem::new(
            "Mobile plan Sam",
            Money::from_major(40),
            ExpenseCategory::Housing,
            "Mobile plan Sam",
            ExpenseType::NonEssential,
            date(2024, 1, 3),
            Contributor::Sam,
        );
        // Simulate a record saved before the field existed
        expense.contributor = None;
        assert_eq!(LineItem::contributor(&expense), Contributor::Sam);
    }

    #[test]
    fn test_wire_field_names() {
        let expense = ExpenseItem::new(
            "Rent",
            Money::from_major(950),
            ExpenseCategory::Housing,
            "Rent",
            ExpenseType::Essential,
            date(2024, 1, 1),
            Contributor::Shared,
        );
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["category"], "housing");
        assert_eq!(json["type"], "essential");
        assert_eq!(json["subcategory"], "Rent");
        assert_eq!(json["contributor"], "shared");
        // Amounts are unit-valued numbers on the wire
        assert_eq!(json["amount"], 950);
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = serde_json::json!({
            "id": "0190f2a4-98f1-7cc3-ae4e-7ba22f0a2f6b",
            "description": "Rent",
            "amount": 95000,
            "category": "housing",
            "subcategory": "Rent",
            "type": "essential",
            "date": "2024-01-01",
            "receiptUrl": "https://example.test/r/1"
        });
        let expense: ExpenseItem = serde_json::from_value(raw).unwrap();
        assert!(expense.contributor.is_none());
        // 95000 in a stored document is 95,000 currency units
        assert_eq!(expense.amount, Money::from_major(95_000));

        let back = serde_json::to_value(&expense).unwrap();
        assert_eq!(back["receiptUrl"], "https://example.test/r/1");
        assert_eq!(back["amount"], 95000);
    }
}
