//! Hierarchy builder
//!
//! Rebuilds the two-level category tree from the flat item list. Top-level
//! items keep their input order, and each one collects the items whose
//! `parent_id` points at it, also in input order. Nesting is exactly one level
//! deep: an item whose parent is itself a child is not attached anywhere.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::models::{BudgetItem, ItemId};

/// Why an item was left out of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// `parent_id` does not match any item in the snapshot
    Orphan,
    /// `parent_id` points at an item that is itself a child
    TooDeep,
}

/// An item excluded from the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedItem {
    pub id: ItemId,
    pub category: String,
    pub parent_id: ItemId,
    pub reason: DropReason,
}

/// The rebuilt forest of top-level items
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hierarchy {
    /// Top-level items with their children attached
    pub items: Vec<BudgetItem>,
    /// Items that could not be placed
    pub dropped: Vec<DroppedItem>,
}

/// Build the category tree from a flat item list
///
/// Any `children` already present on the input are discarded and rebuilt.
/// An authored `is_parent` flag is kept, and items that end up with children
/// are always flagged as parents.
pub fn build_hierarchy(items: &[BudgetItem]) -> Hierarchy {
    let mut roots: Vec<BudgetItem> = Vec::new();
    let mut root_index: HashMap<&ItemId, usize> = HashMap::new();

    for item in items.iter().filter(|item| item.is_top_level()) {
        root_index.insert(&item.id, roots.len());
        roots.push(detached(item));
    }

    let known: HashSet<&ItemId> = items.iter().map(|item| &item.id).collect();
    let mut dropped = Vec::new();

    for item in items {
        let Some(parent_id) = item.parent_id.as_ref() else {
            continue;
        };

        match root_index.get(parent_id) {
            Some(&idx) => roots[idx].children.push(detached(item)),
            None => {
                let reason = if known.contains(parent_id) {
                    DropReason::TooDeep
                } else {
                    DropReason::Orphan
                };
                warn!(
                    item = %item.id,
                    parent = %parent_id,
                    ?reason,
                    "dropping budget item outside the category tree"
                );
                dropped.push(DroppedItem {
                    id: item.id.clone(),
                    category: item.category.clone(),
                    parent_id: parent_id.clone(),
                    reason,
                });
            }
        }
    }

    for root in &mut roots {
        root.is_parent |= root.has_children();
    }

    Hierarchy {
        items: roots,
        dropped,
    }
}

/// Copy an item without any incoming children
fn detached(item: &BudgetItem) -> BudgetItem {
    BudgetItem {
        children: Vec::new(),
        ..item.clone()
    }
}
