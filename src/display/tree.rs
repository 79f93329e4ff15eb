//! Item tree display formatting
//!
//! Formats the rebuilt category tree grouped by category type.

use crate::engine::CategoryGroups;
use crate::models::BudgetItem;

/// Format the item tree, one section per category type
pub fn format_item_tree(groups: &CategoryGroups, symbol: &str, show_children: bool) -> String {
    if groups.is_empty() {
        return "No budget items found.".to_string();
    }

    let mut output = String::new();

    for (category_type, items) in groups.iter() {
        if items.is_empty() {
            continue;
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", category_type.label().to_uppercase()));

        for item in items {
            output.push_str(&format!("  {}\n", format_line(item, symbol)));

            if show_children {
                for (j, child) in item.children.iter().enumerate() {
                    let prefix = if j == item.children.len() - 1 {
                        "└── "
                    } else {
                        "├── "
                    };
                    output.push_str(&format!("    {}{}\n", prefix, format_line(child, symbol)));
                }
            }
        }
    }

    output
}

fn format_line(item: &BudgetItem, symbol: &str) -> String {
    let overspent = if item.is_overspent() { " *" } else { "" };
    format!(
        "{} ({} of {}){}",
        item.category,
        item.spent_amount.format_with_symbol(symbol),
        item.budgeted_amount.format_with_symbol(symbol),
        overspent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{aggregate, build_hierarchy, group_by_type};
    use crate::models::{CategoryType, Money};

    fn groups() -> CategoryGroups {
        let utilities = BudgetItem::parent("Utilities", CategoryType::Needs).with_id("u");
        let hydro = BudgetItem::child_of(&utilities, "Hydro")
            .with_id("h")
            .with_amounts(Money::from_major(200), Money::from_major(150));
        let internet = BudgetItem::child_of(&utilities, "Internet")
            .with_id("i")
            .with_amounts(Money::from_major(100), Money::from_major(120));
        let fun = BudgetItem::new("Fun", CategoryType::Wants)
            .with_id("f")
            .with_amounts(Money::from_major(50), Money::zero());

        let mut items = build_hierarchy(&[utilities, hydro, internet, fun]).items;
        aggregate(&mut items);
        group_by_type(&items)
    }

    #[test]
    fn test_tree_with_children() {
        let output = format_item_tree(&groups(), "$", true);

        assert!(output.contains("NEEDS\n  Utilities ($270.00 of $300.00)"));
        assert!(output.contains("├── Hydro ($150.00 of $200.00)"));
        assert!(output.contains("└── Internet ($120.00 of $100.00) *"));
        assert!(output.contains("WANTS\n  Fun ($0.00 of $50.00)"));
        assert!(!output.contains("SAVINGS"));
    }

    #[test]
    fn test_tree_without_children() {
        let output = format_item_tree(&groups(), "€", false);

        assert!(output.contains("Utilities (€270.00 of €300.00)"));
        assert!(!output.contains("Hydro"));
    }

    #[test]
    fn test_empty_tree() {
        let output = format_item_tree(&group_by_type(&[]), "$", true);
        assert_eq!(output, "No budget items found.");
    }
}
