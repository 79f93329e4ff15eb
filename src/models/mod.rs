//! Core data models for Allotment
//!
//! This module contains the data structures that describe a budget snapshot:
//! items, the budget that owns them, money and allocation frameworks.

pub mod budget;
pub mod framework;
pub mod ids;
pub mod item;
pub mod money;

pub use budget::{Budget, BudgetValidationError};
pub use framework::{FrameworkCatalog, FrameworkId, FrameworkTarget};
pub use ids::{BudgetId, ItemId};
pub use item::{BudgetItem, CategoryType, ItemValidationError};
pub use money::Money;
