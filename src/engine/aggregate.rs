//! Aggregator
//!
//! Parents with children carry derived amounts: their budgeted and spent
//! amounts are overwritten with the sums over their children. Children are
//! only read, so running the pass again yields the same totals.

use tracing::debug;

use crate::models::{BudgetItem, Money};

/// Recompute parent totals in place
pub fn aggregate(items: &mut [BudgetItem]) {
    for item in items.iter_mut().filter(|item| item.has_children()) {
        let budgeted: Money = item.children.iter().map(|c| c.budgeted_amount).sum();
        let spent: Money = item.children.iter().map(|c| c.spent_amount).sum();

        if budgeted != item.budgeted_amount || spent != item.spent_amount {
            debug!(
                item = %item.id,
                authored_budgeted = %item.budgeted_amount,
                budgeted = %budgeted,
                "replacing parent amounts with child totals"
            );
        }

        item.budgeted_amount = budgeted;
        item.spent_amount = spent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::hierarchy::build_hierarchy;
    use crate::models::{CategoryType, ItemId};

    fn tree_with_children(amounts: &[(i64, i64)]) -> Vec<BudgetItem> {
        let parent = BudgetItem::parent("Utilities", CategoryType::Needs)
            .with_id("utilities")
            .with_amounts(Money::from_major(999), Money::from_major(999));

        let mut flat = vec![parent.clone()];
        for (i, (budgeted, spent)) in amounts.iter().enumerate() {
            let child = BudgetItem::child_of(&parent, format!("Line {}", i))
                .with_id(format!("line-{}", i))
                .with_amounts(Money::from_major(*budgeted), Money::from_major(*spent));
            flat.push(child);
        }

        build_hierarchy(&flat).items
    }

    #[test]
    fn test_parent_totals_are_child_sums() {
        let mut items = tree_with_children(&[(10, 4), (20, 25)]);

        aggregate(&mut items);

        assert_eq!(items[0].budgeted_amount, Money::from_major(30));
        assert_eq!(items[0].spent_amount, Money::from_major(29));
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let mut once = tree_with_children(&[(200, 150), (100, 40)]);
        aggregate(&mut once);

        let mut twice = once.clone();
        aggregate(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_children_not_mutated() {
        let mut items = tree_with_children(&[(10, 4), (20, 25)]);
        let children_before = items[0].children.clone();

        aggregate(&mut items);

        assert_eq!(items[0].children, children_before);
    }

    #[test]
    fn test_childless_items_pass_through() {
        let standalone = BudgetItem::new("Groceries", CategoryType::Needs)
            .with_amounts(Money::from_major(100), Money::from_major(80));
        let mut empty_parent = BudgetItem::parent("Travel", CategoryType::Wants)
            .with_amounts(Money::from_major(300), Money::zero());
        empty_parent.id = ItemId::from("travel");

        let mut items = vec![standalone.clone(), empty_parent.clone()];
        aggregate(&mut items);

        assert_eq!(items[0], standalone);
        assert_eq!(items[1], empty_parent);
    }

    #[test]
    fn test_fractional_amounts_sum_exactly() {
        let parent = BudgetItem::parent("Subscriptions", CategoryType::Wants).with_id("subs");
        let a = BudgetItem::child_of(&parent, "Music")
            .with_id("music")
            .with_amounts(Money::from_cents(1099), Money::from_cents(1099));
        let b = BudgetItem::child_of(&parent, "Video")
            .with_id("video")
            .with_amounts(Money::from_cents(1549), Money::zero());

        let mut items = build_hierarchy(&[parent, a, b]).items;
        aggregate(&mut items);

        assert_eq!(items[0].budgeted_amount, Money::from_cents(2648));
        assert_eq!(items[0].spent_amount, Money::from_cents(1099));
    }
}
