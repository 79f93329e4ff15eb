//! Snapshot CLI commands
//!
//! Loading, validating and inspecting budget snapshots.

use crate::config::Settings;
use crate::display::tree::format_item_tree;
use crate::engine::{aggregate, build_hierarchy, group_by_type};
use crate::error::{AllotError, AllotResult};
use crate::models::Budget;
use crate::storage::ItemStore;

/// Load a snapshot and run caller-side validation on it
pub fn load_validated(store: &dyn ItemStore, snapshot: &str) -> AllotResult<Budget> {
    let budget = store.load_budget(snapshot)?;
    budget
        .validate()
        .map_err(|e| AllotError::Validation(e.to_string()))?;
    Ok(budget)
}

/// Handle `allot validate`
pub fn handle_validate_command(store: &dyn ItemStore, snapshot: &str) -> AllotResult<()> {
    let budget = load_validated(store, snapshot)?;

    let children = budget.items.iter().filter(|i| !i.is_top_level()).count();
    println!(
        "Snapshot '{}' is valid: {} items ({} top-level, {} child).",
        budget,
        budget.items.len(),
        budget.items.len() - children,
        children
    );

    let tree = build_hierarchy(&budget.items);
    for dropped in &tree.dropped {
        println!(
            "  warning: '{}' references parent '{}' which is not a top-level item",
            dropped.category, dropped.parent_id
        );
    }

    Ok(())
}

/// Handle `allot tree`
pub fn handle_tree_command(
    store: &dyn ItemStore,
    settings: &Settings,
    snapshot: &str,
) -> AllotResult<()> {
    let budget = load_validated(store, snapshot)?;
    print!("{}", format_tree_view(&budget, settings));
    Ok(())
}

/// Budget title followed by its rolled-up item tree
///
/// Child items are listed only when `show_children` is set.
pub fn format_tree_view(budget: &Budget, settings: &Settings) -> String {
    let mut items = build_hierarchy(&budget.items).items;
    aggregate(&mut items);
    let groups = group_by_type(&items);

    format!(
        "{}\n\n{}",
        budget,
        format_item_tree(&groups, &settings.currency_symbol, settings.show_children)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetItem, CategoryType, Money};

    struct MemoryStore(Budget);

    impl ItemStore for MemoryStore {
        fn load_budget(&self, identifier: &str) -> AllotResult<Budget> {
            if identifier == self.0.id.as_str() {
                Ok(self.0.clone())
            } else {
                Err(AllotError::snapshot_not_found(identifier))
            }
        }
    }

    #[test]
    fn test_load_validated_accepts_valid_snapshot() {
        let mut budget = Budget::new("March", Money::from_major(1000));
        budget.id = "march".into();
        budget.push(BudgetItem::new("Rent", CategoryType::Needs));

        let store = MemoryStore(budget);
        assert!(load_validated(&store, "march").is_ok());
        assert!(load_validated(&store, "april").unwrap_err().is_not_found());
    }

    #[test]
    fn test_tree_view_respects_show_children() {
        let mut budget = Budget::new("March", Money::from_major(1000));
        let utilities = BudgetItem::parent("Utilities", CategoryType::Needs).with_id("utilities");
        budget.push(
            BudgetItem::child_of(&utilities, "Hydro")
                .with_id("hydro")
                .with_amounts(Money::from_major(200), Money::from_major(150)),
        );
        budget.push(utilities);

        let mut settings = Settings::default();
        let expanded = format_tree_view(&budget, &settings);
        assert!(expanded.starts_with("March\n\nNEEDS"));
        assert!(expanded.contains("Utilities ($150.00 of $200.00)"));
        assert!(expanded.contains("└── Hydro"));

        settings.show_children = false;
        let collapsed = format_tree_view(&budget, &settings);
        assert!(collapsed.contains("Utilities ($150.00 of $200.00)"));
        assert!(!collapsed.contains("Hydro"));
    }

    #[test]
    fn test_load_validated_rejects_negative_amounts() {
        let mut budget = Budget::new("March", Money::from_major(1000));
        budget.id = "march".into();
        budget.push(
            BudgetItem::new("Rent", CategoryType::Needs)
                .with_id("rent")
                .with_amounts(Money::from_major(-1), Money::zero()),
        );

        let err = load_validated(&MemoryStore(budget), "march").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Item rent: Budgeted amount cannot be negative"
        );
    }
}
