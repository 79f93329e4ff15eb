//! Budget analysis engine
//!
//! Turns a flat budget snapshot into a derived view:
//!
//! flat items → [`build_hierarchy`] → [`aggregate`] → [`group_by_type`] →
//! [`evaluate`]
//!
//! The pipeline is synchronous and holds no state between calls. It is re-run
//! in full whenever the snapshot changes, and never fails: malformed input is
//! handled by the fallback policies of each stage.

pub mod aggregate;
pub mod evaluation;
pub mod grouping;
pub mod hierarchy;

pub use aggregate::aggregate;
pub use evaluation::{
    classify, evaluate, BucketEvaluation, BucketTotals, DeviationStatus, FrameworkEvaluation,
    TOLERANCE_BAND,
};
pub use grouping::{group_by_type, CategoryGroups, GroupTotals};
pub use hierarchy::{build_hierarchy, DropReason, DroppedItem, Hierarchy};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{
    Budget, BudgetId, BudgetItem, CategoryType, FrameworkCatalog, FrameworkId, ItemId, Money,
};

/// Spending progress of one top-level item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemProgress {
    pub id: ItemId,
    pub category: String,
    pub category_type: CategoryType,
    pub budgeted: Money,
    pub spent: Money,
    pub remaining: Money,
    /// Spent as a percentage of budgeted; zero when nothing is budgeted
    pub utilization: Decimal,
    pub is_overspent: bool,
}

impl ItemProgress {
    fn from_item(item: &BudgetItem) -> Self {
        Self {
            id: item.id.clone(),
            category: item.category.clone(),
            category_type: item.category_type,
            budgeted: item.budgeted_amount,
            spent: item.spent_amount,
            remaining: item.remaining(),
            utilization: item.spent_amount.percent_of(item.budgeted_amount),
            is_overspent: item.is_overspent(),
        }
    }
}

/// The derived view of one budget snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAnalysis {
    pub budget_id: BudgetId,
    pub name: String,
    pub currency: String,
    pub total_income: Money,
    /// Aggregated top-level items with children attached
    pub items: Vec<BudgetItem>,
    pub groups: CategoryGroups,
    pub totals: BucketTotals,
    /// `total_income` minus the needs, wants and savings totals
    pub unallocated: Money,
    pub evaluation: FrameworkEvaluation,
    pub progress: Vec<ItemProgress>,
    pub dropped: Vec<DroppedItem>,
}

impl BudgetAnalysis {
    /// Needs + wants + savings budgeted
    pub fn allocated(&self) -> Money {
        self.totals.allocated()
    }

    /// Whether every unit of income has been given a job
    pub fn is_fully_allocated(&self) -> bool {
        self.unallocated.is_zero()
    }

    /// Sums for one bucket, including income
    pub fn group_totals(&self, category_type: CategoryType) -> GroupTotals {
        self.groups.totals(category_type)
    }

    /// Top-level items whose spending exceeds their budget
    pub fn overspent(&self) -> impl Iterator<Item = &ItemProgress> {
        self.progress.iter().filter(|p| p.is_overspent)
    }
}

/// Run the full pipeline over a budget snapshot
///
/// `default_framework` applies when the snapshot does not name one.
pub fn analyze(
    budget: &Budget,
    default_framework: &FrameworkId,
    catalog: &FrameworkCatalog,
) -> BudgetAnalysis {
    let Hierarchy { mut items, dropped } = build_hierarchy(&budget.items);
    aggregate(&mut items);

    let groups = group_by_type(&items);
    let totals = BucketTotals::from_groups(&groups);
    let framework = budget.framework_or(default_framework);
    let evaluation = evaluate(&totals, budget.total_income, &framework, catalog);
    let progress = items.iter().map(ItemProgress::from_item).collect();

    debug!(
        budget = %budget.id,
        top_level = items.len(),
        dropped = dropped.len(),
        "analysis complete"
    );

    BudgetAnalysis {
        budget_id: budget.id.clone(),
        name: budget.name.clone(),
        currency: budget.currency.clone(),
        total_income: budget.total_income,
        unallocated: budget.total_income - totals.allocated(),
        items,
        groups,
        totals,
        evaluation,
        progress,
        dropped,
    }
}
