//! Category and contributor key enums
//!
//! These are the closed key sets the registry and line items are indexed by.
//! Serde names match the persisted record format exactly, so previously
//! saved budgets keep deserializing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A household contributor bucket.
///
/// Income categories are per-contributor, so this enum doubles as the income
/// item category and as the attribution bucket for per-person reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contributor {
    Alex,
    Sam,
    Shared,
}

impl Contributor {
    /// All contributor buckets, in report order
    pub fn all() -> &'static [Self] {
        &[Self::Alex, Self::Sam, Self::Shared]
    }

    /// Display name for this contributor
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alex => "Alex",
            Self::Sam => "Sam",
            Self::Shared => "Shared",
        }
    }

    /// Legacy attribution heuristic for records saved before items carried
    /// an explicit `contributor` field.
    ///
    /// Matches contributor names as case-insensitive substrings of the
    /// item's free-text description and subcategory, defaulting to the
    /// shared bucket. New records never go through this path; it exists only
    /// so old data keeps reporting the way it always did.
    pub fn infer_legacy(description: &str, subcategory: &str) -> Self {
        let description = description.to_lowercase();
        let subcategory = subcategory.to_lowercase();

        for contributor in [Self::Alex, Self::Sam] {
            let needle = contributor.name().to_lowercase();
            if description.contains(&needle) || subcategory.contains(&needle) {
                return contributor;
            }
        }
        Self::Shared
    }
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Expense category keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Housing,
    Transport,
    Food,
    Education,
    Other,
}

impl ExpenseCategory {
    /// All expense categories, in registry order
    pub fn all() -> &'static [Self] {
        &[
            Self::Housing,
            Self::Transport,
            Self::Food,
            Self::Education,
            Self::Other,
        ]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Self::Housing => "housing",
            Self::Transport => "transport",
            Self::Food => "food",
            Self::Education => "education",
            Self::Other => "other",
        };
        write!(f, "{}", key)
    }
}

/// Essential/non-essential/variable classification of an expense.
///
/// Fixed per subcategory at registry-definition time and frozen onto each
/// expense item when it is created, so later registry edits never rewrite
/// historical reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseType {
    Essential,
    NonEssential,
    Variable,
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Self::Essential => "essential",
            Self::NonEssential => "non-essential",
            Self::Variable => "variable",
        };
        write!(f, "{}", key)
    }
}
