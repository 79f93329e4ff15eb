//! Budget model
//!
//! A budget is a snapshot handed over by the item store: total income, the
//! chosen allocation framework, an opaque currency label and the flat list of
//! items.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::framework::FrameworkId;
use super::ids::{BudgetId, ItemId};
use super::item::{BudgetItem, ItemValidationError};
use super::money::Money;

/// A monthly budget snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    #[serde(default)]
    pub id: BudgetId,

    /// Display name (e.g. "March 2025")
    #[serde(default)]
    pub name: String,

    /// Denominator for every percentage calculation
    #[serde(default)]
    pub total_income: Money,

    /// Allocation framework; falls back to the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<FrameworkId>,

    /// Currency label, carried through untouched
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Flat list of items as supplied by the store
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Budget {
    /// Create an empty budget
    pub fn new(name: impl Into<String>, total_income: Money) -> Self {
        Self {
            id: BudgetId::new(),
            name: name.into(),
            total_income,
            framework: None,
            currency: default_currency(),
            items: Vec::new(),
        }
    }

    /// Set the allocation framework
    pub fn with_framework(mut self, framework: FrameworkId) -> Self {
        self.framework = Some(framework);
        self
    }

    /// Add an item to the flat list
    pub fn push(&mut self, item: BudgetItem) {
        self.items.push(item);
    }

    /// The framework to evaluate against, given a fallback
    pub fn framework_or(&self, fallback: &FrameworkId) -> FrameworkId {
        self.framework.clone().unwrap_or_else(|| fallback.clone())
    }

    /// Validate the snapshot before it is handed to the engine
    ///
    /// The engine itself never validates; this is for callers.
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.total_income.is_negative() {
            return Err(BudgetValidationError::NegativeIncome);
        }

        let mut seen: HashSet<&ItemId> = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(&item.id) {
                return Err(BudgetValidationError::DuplicateItemId(item.id.clone()));
            }

            item.validate()
                .map_err(|source| BudgetValidationError::InvalidItem {
                    item_id: item.id.clone(),
                    source,
                })?;
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeIncome,
    DuplicateItemId(ItemId),
    InvalidItem {
        item_id: ItemId,
        source: ItemValidationError,
    },
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIncome => write!(f, "Total income cannot be negative"),
            Self::DuplicateItemId(id) => write!(f, "Duplicate item id: {}", id),
            Self::InvalidItem { item_id, source } => {
                write!(f, "Item {}: {}", item_id, source)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
