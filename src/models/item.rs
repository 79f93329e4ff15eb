//! Budget items and category types
//!
//! A budget item is one category or line item. Items arrive from the item store
//! as a flat list; `parent_id` links a child to its top-level parent. The
//! `children` field is only ever filled in by the hierarchy builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ItemId;
use super::money::Money;

/// Maximum length of a category display name, in characters
pub const MAX_CATEGORY_LEN: usize = 100;

/// The allocation bucket an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Needs,
    Wants,
    Savings,
    Income,
}

impl CategoryType {
    /// All category types in display order
    pub fn all() -> &'static [Self] {
        &[Self::Needs, Self::Wants, Self::Savings, Self::Income]
    }

    /// The buckets a framework may target (income is never targeted)
    pub fn spending() -> &'static [Self] {
        &[Self::Needs, Self::Wants, Self::Savings]
    }

    /// Get the display label for this type
    pub fn label(&self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::Savings => "Savings",
            Self::Income => "Income",
        }
    }

    /// Get the identifier used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Needs => "needs",
            Self::Wants => "wants",
            Self::Savings => "savings",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CategoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "needs" | "need" => Ok(Self::Needs),
            "wants" | "want" => Ok(Self::Wants),
            "savings" | "saving" => Ok(Self::Savings),
            "income" => Ok(Self::Income),
            other => Err(format!("Unknown category type: {}", other)),
        }
    }
}

/// A single category or line item within a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier (assigned by the item store)
    pub id: ItemId,

    /// Display name
    pub category: String,

    /// Allocation bucket; only meaningful on top-level items
    pub category_type: CategoryType,

    /// Amount planned for the period; derived for parents with children
    #[serde(default)]
    pub budgeted_amount: Money,

    /// Amount spent so far; derived for parents with children
    #[serde(default)]
    pub spent_amount: Money,

    /// Parent item, if this is a child line item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ItemId>,

    /// Whether the item was created to hold children
    #[serde(default)]
    pub is_parent: bool,

    /// Child items, filled in by the hierarchy builder
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BudgetItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BudgetItem {
    /// Create a new standalone item
    pub fn new(category: impl Into<String>, category_type: CategoryType) -> Self {
        Self {
            id: ItemId::new(),
            category: category.into(),
            category_type,
            budgeted_amount: Money::zero(),
            spent_amount: Money::zero(),
            parent_id: None,
            is_parent: false,
            children: Vec::new(),
            icon: None,
            color: None,
            description: None,
        }
    }

    /// Create a new item flagged as a parent
    pub fn parent(category: impl Into<String>, category_type: CategoryType) -> Self {
        let mut item = Self::new(category, category_type);
        item.is_parent = true;
        item
    }

    /// Create a child line item under `parent`
    pub fn child_of(parent: &BudgetItem, category: impl Into<String>) -> Self {
        let mut item = Self::new(category, parent.category_type);
        item.parent_id = Some(parent.id.clone());
        item
    }

    /// Set the item's id
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the budgeted and spent amounts
    pub fn with_amounts(mut self, budgeted: Money, spent: Money) -> Self {
        self.budgeted_amount = budgeted;
        self.spent_amount = spent;
        self
    }

    /// Whether this item has no parent
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether this item structurally holds children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Budgeted minus spent; negative when overspent
    pub fn remaining(&self) -> Money {
        self.budgeted_amount - self.spent_amount
    }

    /// Whether spending exceeds the budgeted amount
    pub fn is_overspent(&self) -> bool {
        self.spent_amount > self.budgeted_amount
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        let name = self.category.trim();
        if name.is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        let len = name.chars().count();
        if len > MAX_CATEGORY_LEN {
            return Err(ItemValidationError::NameTooLong(len));
        }

        if self.budgeted_amount.is_negative() {
            return Err(ItemValidationError::NegativeBudgeted);
        }

        if self.spent_amount.is_negative() {
            return Err(ItemValidationError::NegativeSpent);
        }

        if self.parent_id.as_ref() == Some(&self.id) {
            return Err(ItemValidationError::SelfParent);
        }

        Ok(())
    }
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Validation errors for budget items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeBudgeted,
    NegativeSpent,
    SelfParent,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} chars, max {})",
                len, MAX_CATEGORY_LEN
            ),
            Self::NegativeBudgeted => write!(f, "Budgeted amount cannot be negative"),
            Self::NegativeSpent => write!(f, "Spent amount cannot be negative"),
            Self::SelfParent => write!(f, "Item cannot be its own parent"),
        }
    }
}

impl std::error::Error for ItemValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item() {
        let item = BudgetItem::new("Groceries", CategoryType::Needs);
        assert_eq!(item.category, "Groceries");
        assert!(item.is_top_level());
        assert!(!item.is_parent);
        assert!(!item.has_children());
    }

    #[test]
    fn test_child_of() {
        let parent = BudgetItem::parent("Utilities", CategoryType::Needs);
        let child = BudgetItem::child_of(&parent, "Hydro");

        assert!(parent.is_parent);
        assert_eq!(child.parent_id.as_ref(), Some(&parent.id));
        assert_eq!(child.category_type, CategoryType::Needs);
        assert!(!child.is_top_level());
    }

    #[test]
    fn test_remaining_and_overspent() {
        let item = BudgetItem::new("Dining", CategoryType::Wants)
            .with_amounts(Money::from_major(100), Money::from_major(130));

        assert_eq!(item.remaining(), Money::from_major(-30));
        assert!(item.is_overspent());
    }

    #[test]
    fn test_validation() {
        let mut item = BudgetItem::new("Valid", CategoryType::Needs);
        assert!(item.validate().is_ok());

        item.category = "   ".into();
        assert_eq!(item.validate(), Err(ItemValidationError::EmptyName));

        item.category = "a".repeat(101);
        assert_eq!(item.validate(), Err(ItemValidationError::NameTooLong(101)));

        item.category = "a".repeat(100);
        assert!(item.validate().is_ok());

        item.budgeted_amount = Money::from_major(-1);
        assert_eq!(item.validate(), Err(ItemValidationError::NegativeBudgeted));

        item.budgeted_amount = Money::zero();
        item.spent_amount = Money::from_major(-1);
        assert_eq!(item.validate(), Err(ItemValidationError::NegativeSpent));
    }

    #[test]
    fn test_self_parent_rejected() {
        let mut item = BudgetItem::new("Loop", CategoryType::Wants).with_id("a");
        item.parent_id = Some(ItemId::from("a"));
        assert_eq!(item.validate(), Err(ItemValidationError::SelfParent));
    }

    #[test]
    fn test_category_type_parsing() {
        assert_eq!("needs".parse::<CategoryType>().unwrap(), CategoryType::Needs);
        assert_eq!(" Savings ".parse::<CategoryType>().unwrap(), CategoryType::Savings);
        assert!("luxuries".parse::<CategoryType>().is_err());
    }

    #[test]
    fn test_deserialize_minimal_item() {
        let json = r#"{
            "id": "hydro",
            "category": "Hydro",
            "category_type": "needs",
            "budgeted_amount": 120.50,
            "parent_id": "utilities"
        }"#;
        let item: BudgetItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id.as_str(), "hydro");
        assert_eq!(item.parent_id, Some(ItemId::from("utilities")));
        assert_eq!(item.budgeted_amount, Money::from_cents(12050));
        assert!(item.spent_amount.is_zero());
        assert!(item.children.is_empty());
    }
}
