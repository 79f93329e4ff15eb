//! Category grouper
//!
//! Partitions top-level items into the four category-type buckets. Only the
//! top-level item's own type counts; a child's type is informational.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{BudgetItem, CategoryType, Money};

/// Budgeted and spent sums over one bucket's top-level items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupTotals {
    pub budgeted: Money,
    pub spent: Money,
    pub item_count: usize,
}

impl GroupTotals {
    /// Budgeted minus spent across the bucket
    pub fn remaining(&self) -> Money {
        self.budgeted - self.spent
    }
}

/// Top-level items keyed by category type; every type is always present
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryGroups {
    groups: BTreeMap<CategoryType, Vec<BudgetItem>>,
}

impl CategoryGroups {
    /// Items in a bucket, in their tree order
    pub fn get(&self, category_type: CategoryType) -> &[BudgetItem] {
        self.groups
            .get(&category_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sums for a bucket
    pub fn totals(&self, category_type: CategoryType) -> GroupTotals {
        let items = self.get(category_type);
        GroupTotals {
            budgeted: items.iter().map(|i| i.budgeted_amount).sum(),
            spent: items.iter().map(|i| i.spent_amount).sum(),
            item_count: items.len(),
        }
    }

    /// Iterate over all buckets in display order
    pub fn iter(&self) -> impl Iterator<Item = (CategoryType, &[BudgetItem])> {
        self.groups.iter().map(|(t, items)| (*t, items.as_slice()))
    }

    /// Total number of top-level items across all buckets
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Whether no bucket holds any item
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group aggregated top-level items by their category type
pub fn group_by_type(items: &[BudgetItem]) -> CategoryGroups {
    let mut groups: BTreeMap<CategoryType, Vec<BudgetItem>> = CategoryType::all()
        .iter()
        .map(|t| (*t, Vec::new()))
        .collect();

    for item in items {
        groups
            .entry(item.category_type)
            .or_default()
            .push(item.clone());
    }

    CategoryGroups { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{aggregate::aggregate, hierarchy::build_hierarchy};

    fn item(id: &str, category_type: CategoryType, budgeted: i64) -> BudgetItem {
        BudgetItem::new(id, category_type)
            .with_id(id)
            .with_amounts(Money::from_major(budgeted), Money::zero())
    }

    #[test]
    fn test_absent_types_map_to_empty() {
        let groups = group_by_type(&[item("rent", CategoryType::Needs, 900)]);

        assert_eq!(groups.get(CategoryType::Needs).len(), 1);
        assert!(groups.get(CategoryType::Wants).is_empty());
        assert!(groups.get(CategoryType::Savings).is_empty());
        assert!(groups.get(CategoryType::Income).is_empty());
        assert_eq!(groups.iter().count(), 4);
    }

    #[test]
    fn test_groups_partition_items() {
        let items = vec![
            item("rent", CategoryType::Needs, 900),
            item("movies", CategoryType::Wants, 50),
            item("salary", CategoryType::Income, 3000),
            item("groceries", CategoryType::Needs, 400),
            item("rrsp", CategoryType::Savings, 200),
        ];

        let groups = group_by_type(&items);

        assert_eq!(groups.len(), items.len());
        let mut seen: Vec<&str> = groups
            .iter()
            .flat_map(|(_, items)| items.iter().map(|i| i.id.as_str()))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["groceries", "movies", "rent", "rrsp", "salary"]);

        let needs: Vec<&str> = groups
            .get(CategoryType::Needs)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(needs, vec!["rent", "groceries"]);
    }

    #[test]
    fn test_child_type_ignored() {
        let parent = BudgetItem::parent("Home", CategoryType::Needs).with_id("home");
        let mut child = BudgetItem::child_of(&parent, "Decor")
            .with_id("decor")
            .with_amounts(Money::from_major(75), Money::zero());
        child.category_type = CategoryType::Wants;

        let mut tree = build_hierarchy(&[parent, child]).items;
        aggregate(&mut tree);
        let groups = group_by_type(&tree);

        assert_eq!(groups.get(CategoryType::Needs).len(), 1);
        assert!(groups.get(CategoryType::Wants).is_empty());
        assert_eq!(groups.totals(CategoryType::Needs).budgeted, Money::from_major(75));
    }

    #[test]
    fn test_totals() {
        let mut dining = item("dining", CategoryType::Wants, 200);
        dining.spent_amount = Money::from_major(250);
        let groups = group_by_type(&[dining, item("games", CategoryType::Wants, 50)]);

        let totals = groups.totals(CategoryType::Wants);
        assert_eq!(totals.budgeted, Money::from_major(250));
        assert_eq!(totals.spent, Money::from_major(250));
        assert_eq!(totals.item_count, 2);
        assert!(totals.remaining().is_zero());
        assert_eq!(groups.totals(CategoryType::Savings), GroupTotals::default());
    }
}
