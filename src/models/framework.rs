//! Allocation frameworks and their target percentages
//!
//! A framework names an allocation strategy such as the 50/30/20 rule. Only
//! frameworks with fixed ratios have a [`FrameworkTarget`]; the catalog that
//! maps identifiers to targets is built once and handed to the evaluator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::item::CategoryType;

/// Identifier of an allocation framework
///
/// Unrecognised identifiers are kept verbatim as `Other` and behave like a
/// framework without targets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FrameworkId {
    FiftyThirtyTwenty,
    SixtyTwentyTwenty,
    ZeroBased,
    Custom,
    Other(String),
}

impl FrameworkId {
    /// All frameworks known to the application
    pub fn known() -> [Self; 4] {
        [
            Self::FiftyThirtyTwenty,
            Self::SixtyTwentyTwenty,
            Self::ZeroBased,
            Self::Custom,
        ]
    }

    /// Get the identifier as stored in snapshots
    pub fn as_str(&self) -> &str {
        match self {
            Self::FiftyThirtyTwenty => "50_30_20",
            Self::SixtyTwentyTwenty => "60_20_20",
            Self::ZeroBased => "zero_based",
            Self::Custom => "custom",
            Self::Other(id) => id,
        }
    }

    /// Get a human-readable name
    pub fn label(&self) -> String {
        match self {
            Self::FiftyThirtyTwenty => "50/30/20 Rule".to_string(),
            Self::SixtyTwentyTwenty => "60/20/20 Rule".to_string(),
            Self::ZeroBased => "Zero-Based".to_string(),
            Self::Custom => "Custom".to_string(),
            Self::Other(id) => format!("Unknown ({})", id),
        }
    }

    /// Whether this identifier is one the application recognises
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for FrameworkId {
    fn default() -> Self {
        Self::FiftyThirtyTwenty
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FrameworkId {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().replace(['/', '-'], "_").as_str() {
            "50_30_20" => Self::FiftyThirtyTwenty,
            "60_20_20" => Self::SixtyTwentyTwenty,
            "zero_based" | "zerobased" => Self::ZeroBased,
            "custom" => Self::Custom,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for FrameworkId {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<FrameworkId> for String {
    fn from(id: FrameworkId) -> Self {
        id.as_str().to_string()
    }
}

impl FromStr for FrameworkId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Target share of income for each spending bucket, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkTarget {
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
}

impl FrameworkTarget {
    /// Create a target from whole percentages
    pub fn new(needs: u32, wants: u32, savings: u32) -> Self {
        Self {
            needs: Decimal::from(needs),
            wants: Decimal::from(wants),
            savings: Decimal::from(savings),
        }
    }

    /// Target percentage for a bucket; income is never targeted
    pub fn for_type(&self, category_type: CategoryType) -> Option<Decimal> {
        match category_type {
            CategoryType::Needs => Some(self.needs),
            CategoryType::Wants => Some(self.wants),
            CategoryType::Savings => Some(self.savings),
            CategoryType::Income => None,
        }
    }
}

/// Immutable lookup table from framework identifier to target allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkCatalog {
    targets: BTreeMap<FrameworkId, FrameworkTarget>,
}

impl FrameworkCatalog {
    /// Create a catalog from explicit entries
    pub fn new(entries: impl IntoIterator<Item = (FrameworkId, FrameworkTarget)>) -> Self {
        Self {
            targets: entries.into_iter().collect(),
        }
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        Self::new([
            (FrameworkId::FiftyThirtyTwenty, FrameworkTarget::new(50, 30, 20)),
            (FrameworkId::SixtyTwentyTwenty, FrameworkTarget::new(60, 20, 20)),
        ])
    }

    /// Look up the targets for a framework, if it has fixed ratios
    pub fn target(&self, framework: &FrameworkId) -> Option<&FrameworkTarget> {
        self.targets.get(framework)
    }

    /// Iterate over all frameworks with fixed ratios
    pub fn iter(&self) -> impl Iterator<Item = (&FrameworkId, &FrameworkTarget)> {
        self.targets.iter()
    }
}

impl Default for FrameworkCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
