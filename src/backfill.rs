//! Backfill resolver
//!
//! Fills missing per-item metadata from the catalog without ever touching a
//! field that already holds a valid explicit value. A weight is explicit when
//! it is positive; zero and negative weights mean "unknown" in the stored
//! blobs and are treated as missing. When the catalog has nothing for a name,
//! the field stays missing — guessing here would poison the weight totals.

use crate::catalog::Catalog;
use crate::types::GearItem;

/// Return a copy of `item` with missing weight/importance/category filled
/// from the catalog where it has an answer.
pub fn backfill(item: &GearItem, catalog: &Catalog) -> GearItem {
    let mut filled = item.clone();

    let needs_weight = !item.has_explicit_weight();
    let needs_importance = item.importance.is_none();
    let needs_category = item.category.is_none();

    if !(needs_weight || needs_importance || needs_category) {
        return filled;
    }

    if let Some(defaults) = catalog.lookup_defaults(&item.item_name) {
        if needs_weight {
            filled.estimated_weight_kg = Some(defaults.weight_kg);
        }
        if needs_importance {
            filled.importance = Some(defaults.importance);
        }
        if needs_category {
            filled.category = Some(defaults.category);
        }
    }

    filled
}

/// Backfill every item in a list, preserving order
pub fn backfill_all(items: &[GearItem], catalog: &Catalog) -> Vec<GearItem> {
    items.iter().map(|item| backfill(item, catalog)).collect()
}
