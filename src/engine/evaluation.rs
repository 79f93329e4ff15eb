//! Framework evaluator
//!
//! Compares each spending bucket's share of income with the framework's
//! target and classifies the deviation. A pure function of the bucket totals,
//! total income, framework and catalog.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use super::grouping::CategoryGroups;
use crate::models::{CategoryType, FrameworkCatalog, FrameworkId, Money};

/// Half-width of the on-target band, in percentage points
pub const TOLERANCE_BAND: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Budgeted totals for the three targeted buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketTotals {
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
}

impl BucketTotals {
    /// Sum budgeted amounts per bucket from grouped top-level items
    pub fn from_groups(groups: &CategoryGroups) -> Self {
        Self {
            needs: groups.totals(CategoryType::Needs).budgeted,
            wants: groups.totals(CategoryType::Wants).budgeted,
            savings: groups.totals(CategoryType::Savings).budgeted,
        }
    }

    /// Total for a bucket; income is not a targeted bucket
    pub fn for_type(&self, category_type: CategoryType) -> Option<Money> {
        match category_type {
            CategoryType::Needs => Some(self.needs),
            CategoryType::Wants => Some(self.wants),
            CategoryType::Savings => Some(self.savings),
            CategoryType::Income => None,
        }
    }

    /// Needs + wants + savings
    pub fn allocated(&self) -> Money {
        self.needs + self.wants + self.savings
    }
}

/// How a bucket's share compares to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationStatus {
    OnTarget,
    OverTarget,
    UnderTarget,
    /// No income to compare against
    Undetermined,
}

impl DeviationStatus {
    /// Get a short display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTarget => "on target",
            Self::OverTarget => "over target",
            Self::UnderTarget => "under target",
            Self::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for DeviationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a deviation in percentage points
pub fn classify(deviation: Decimal) -> DeviationStatus {
    if deviation.abs() < TOLERANCE_BAND {
        DeviationStatus::OnTarget
    } else if deviation > Decimal::ZERO {
        DeviationStatus::OverTarget
    } else {
        DeviationStatus::UnderTarget
    }
}

/// Evaluation of one spending bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketEvaluation {
    pub category_type: CategoryType,
    pub total: Money,
    /// Share of total income, in percent
    pub percentage: Decimal,
    pub target: Option<Decimal>,
    /// `percentage - target`, when both are defined
    pub deviation: Option<Decimal>,
    /// `None` when the framework has no targets
    pub status: Option<DeviationStatus>,
}

/// Result of evaluating a budget against its framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkEvaluation {
    pub framework: FrameworkId,
    pub has_targets: bool,
    pub buckets: Vec<BucketEvaluation>,
}

impl FrameworkEvaluation {
    /// Evaluation for a single bucket
    pub fn bucket(&self, category_type: CategoryType) -> Option<&BucketEvaluation> {
        self.buckets
            .iter()
            .find(|b| b.category_type == category_type)
    }

    /// Whether every targeted bucket is within the tolerance band
    pub fn is_compliant(&self) -> bool {
        self.has_targets
            && self
                .buckets
                .iter()
                .all(|b| b.status == Some(DeviationStatus::OnTarget))
    }
}

/// Evaluate bucket totals against a framework
///
/// With zero income every percentage is zero and every status is
/// [`DeviationStatus::Undetermined`]. Frameworks missing from the catalog
/// report percentages only.
pub fn evaluate(
    totals: &BucketTotals,
    total_income: Money,
    framework: &FrameworkId,
    catalog: &FrameworkCatalog,
) -> FrameworkEvaluation {
    let target = catalog.target(framework);
    if target.is_none() && !matches!(framework, FrameworkId::ZeroBased | FrameworkId::Custom) {
        warn!(framework = %framework, "framework not in catalog, skipping classification");
    }

    let income_missing = total_income.is_zero();
    debug!(
        framework = %framework,
        income = %total_income,
        has_targets = target.is_some(),
        "evaluating allocation"
    );

    let buckets = CategoryType::spending()
        .iter()
        .map(|&category_type| {
            let total = totals.for_type(category_type).unwrap_or_default();
            let percentage = total.percent_of(total_income);
            let bucket_target = target.and_then(|t| t.for_type(category_type));

            let (deviation, status) = if income_missing {
                (None, Some(DeviationStatus::Undetermined))
            } else {
                match bucket_target {
                    Some(t) => {
                        let deviation = percentage.saturating_sub(t);
                        (Some(deviation), Some(classify(deviation)))
                    }
                    None => (None, None),
                }
            };

            BucketEvaluation {
                category_type,
                total,
                percentage,
                target: bucket_target,
                deviation,
                status,
            }
        })
        .collect();

    FrameworkEvaluation {
        framework: framework.clone(),
        has_targets: target.is_some(),
        buckets,
    }
}
