//! Category registry
//!
//! Static, immutable mapping from category keys to display metadata and
//! valid subcategories. The registry is built once at startup
//! ([`CategoryRegistry::standard`]) and passed by reference to the services
//! and engine; nothing mutates it at runtime.
//!
//! Subcategory classification is deliberately permissive: entry forms allow
//! free-text subcategory names, so names that miss the registry classify as
//! [`ExpenseType::Variable`] instead of erroring.

use serde::{Deserialize, Serialize};

use crate::models::{Contributor, ExpenseCategory, ExpenseType};

/// A configured expense subcategory with its fixed classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub subcategory_type: ExpenseType,
}

impl SubcategoryConfig {
    fn new(name: &str, subcategory_type: ExpenseType) -> Self {
        Self {
            name: name.to_string(),
            subcategory_type,
        }
    }
}

/// Display metadata and subcategories for one expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCategoryConfig {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub subcategories: Vec<SubcategoryConfig>,
}

/// Display metadata and subcategories for one income category.
///
/// Income subcategories carry no essential/non-essential/variable
/// classification; they are plain names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeCategoryConfig {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub subcategories: Vec<String>,
}

/// The full category taxonomy: expense categories keyed by
/// [`ExpenseCategory`], income categories keyed by [`Contributor`].
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    expense: Vec<(ExpenseCategory, ExpenseCategoryConfig)>,
    income: Vec<(Contributor, IncomeCategoryConfig)>,
}

impl CategoryRegistry {
    /// Look up an expense category's configuration
    pub fn expense_category(&self, key: ExpenseCategory) -> Option<&ExpenseCategoryConfig> {
        self.expense
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, config)| config)
    }

    /// Look up an income category's configuration
    pub fn income_category(&self, key: Contributor) -> Option<&IncomeCategoryConfig> {
        self.income
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, config)| config)
    }

    /// Resolve the classification for a subcategory name within a category.
    ///
    /// Exact-name match against the configured subcategories; names absent
    /// from the registry fall back to [`ExpenseType::Variable`].
    pub fn classify_subcategory(&self, category: ExpenseCategory, subcategory: &str) -> ExpenseType {
        self.expense_category(category)
            .and_then(|config| {
                config
                    .subcategories
                    .iter()
                    .find(|sub| sub.name == subcategory)
            })
            .map(|sub| sub.subcategory_type)
            .unwrap_or(ExpenseType::Variable)
    }

    /// Expense categories in registry order
    pub fn expense_categories(&self) -> impl Iterator<Item = (ExpenseCategory, &ExpenseCategoryConfig)> {
        self.expense.iter().map(|(k, config)| (*k, config))
    }

    /// Income categories in registry order
    pub fn income_categories(&self) -> impl Iterator<Item = (Contributor, &IncomeCategoryConfig)> {
        self.income.iter().map(|(k, config)| (*k, config))
    }

    /// Build the household's standard taxonomy
    pub fn standard() -> Self {
        use ExpenseType::{Essential, NonEssential, Variable};

        let expense = vec![
            (
                ExpenseCategory::Housing,
                ExpenseCategoryConfig {
                    name: "Housing".to_string(),
                    icon: "🏠".to_string(),
                    color: "#3b82f6".to_string(),
                    subcategories: vec![
                        SubcategoryConfig::new("Rent", Essential),
                        SubcategoryConfig::new("Electricity", Essential),
                        SubcategoryConfig::new("Gas", Essential),
                        SubcategoryConfig::new("Water", NonEssential),
                        SubcategoryConfig::new("Home internet", Essential),
                        SubcategoryConfig::new("Mobile plan Alex", NonEssential),
                        SubcategoryConfig::new("Mobile plan Sam", NonEssential),
                        SubcategoryConfig::new("Streaming & cable", NonEssential),
                        SubcategoryConfig::new("Cleaning", Essential),
                        SubcategoryConfig::new("Maintenance & repairs", NonEssential),
                        SubcategoryConfig::new("Household supplies", NonEssential),
                    ],
                },
            ),
            (
                ExpenseCategory::Transport,
                ExpenseCategoryConfig {
                    name: "Transport".to_string(),
                    icon: "🚗".to_string(),
                    color: "#22c55e".to_string(),
                    subcategories: vec![
                        SubcategoryConfig::new("Bus & taxi fares", NonEssential),
                        SubcategoryConfig::new("Fuel", NonEssential),
                        SubcategoryConfig::new("Vehicle maintenance", NonEssential),
                    ],
                },
            ),
            (
                ExpenseCategory::Food,
                ExpenseCategoryConfig {
                    name: "Food".to_string(),
                    icon: "🍽️".to_string(),
                    color: "#f97316".to_string(),
                    subcategories: vec![
                        SubcategoryConfig::new("Groceries", Essential),
                        SubcategoryConfig::new("Restaurants", NonEssential),
                        SubcategoryConfig::new("Snacks", Essential),
                        SubcategoryConfig::new("Other food", Variable),
                    ],
                },
            ),
            (
                ExpenseCategory::Education,
                ExpenseCategoryConfig {
                    name: "Education".to_string(),
                    icon: "📚".to_string(),
                    color: "#a855f7".to_string(),
                    subcategories: vec![
                        SubcategoryConfig::new("Tuition", Essential),
                        SubcategoryConfig::new("School transport", Essential),
                        SubcategoryConfig::new("School supplies", Essential),
                        SubcategoryConfig::new("Uniforms", Variable),
                        SubcategoryConfig::new("Extraordinary fees", Variable),
                        SubcategoryConfig::new("Other education", Variable),
                    ],
                },
            ),
            (
                ExpenseCategory::Other,
                ExpenseCategoryConfig {
                    name: "Other expenses".to_string(),
                    icon: "💼".to_string(),
                    color: "#ef4444".to_string(),
                    subcategories: vec![
                        SubcategoryConfig::new("Health", Essential),
                        SubcategoryConfig::new("Medications", Essential),
                        SubcategoryConfig::new("Insurance", Essential),
                        SubcategoryConfig::new("Pet care", Essential),
                        SubcategoryConfig::new("Personal care", Essential),
                        SubcategoryConfig::new("Taxes", Variable),
                        SubcategoryConfig::new("Loan payments", Essential),
                        SubcategoryConfig::new("Credit cards", Essential),
                        SubcategoryConfig::new("Entertainment", Variable),
                        SubcategoryConfig::new("Other", Variable),
                    ],
                },
            ),
        ];

        let income = vec![
            (
                Contributor::Alex,
                IncomeCategoryConfig {
                    name: "Alex".to_string(),
                    icon: "👩‍💼".to_string(),
                    color: "#ec4899".to_string(),
                    subcategories: vec![
                        "Alex salary".to_string(),
                        "Alex freelance".to_string(),
                        "Alex bonuses".to_string(),
                        "Other income Alex".to_string(),
                    ],
                },
            ),
            (
                Contributor::Sam,
                IncomeCategoryConfig {
                    name: "Sam".to_string(),
                    icon: "👨‍💼".to_string(),
                    color: "#3b82f6".to_string(),
                    subcategories: vec![
                        "Sam salary".to_string(),
                        "Sam freelance".to_string(),
                        "Sam bonuses".to_string(),
                        "Other income Sam".to_string(),
                    ],
                },
            ),
            (
                Contributor::Shared,
                IncomeCategoryConfig {
                    name: "Shared income".to_string(),
                    icon: "🏠".to_string(),
                    color: "#22c55e".to_string(),
                    subcategories: vec![
                        "Joint income".to_string(),
                        "Refunds".to_string(),
                        "Family gifts".to_string(),
                        "Other shared income".to_string(),
                    ],
                },
            ),
        ];

        Self { expense, income }
    }
}
