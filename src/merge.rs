//! Merge engine
//!
//! Unions a user's existing gear list with freshly generated recommendations,
//! deduplicated by normalized name. Existing items keep their order and win
//! every collision; recommendations are appended in generation order.
//!
//! Merging is a fixed point: after one pass every recommended name is already
//! present, so callers may safely re-run it (e.g. after a failed save)
//! without double-adding items.

use crate::backfill::backfill_all;
use crate::catalog::Catalog;
use crate::recommend::generate;
use crate::types::{Climb, GearItem};
use crate::utils::normalize;
use rustc_hash::FxHashSet;

/// Merge existing gear with the recommendations for `climb`.
///
/// Inputs are never mutated; the result is a new list of backfilled existing
/// items followed by the recommendations whose normalized name was absent.
pub fn merge(existing: &[GearItem], climb: &Climb, catalog: &Catalog) -> Vec<GearItem> {
    let mut merged = backfill_all(existing, catalog);

    let present: FxHashSet<String> = merged
        .iter()
        .map(|item| normalize(&item.item_name))
        .collect();

    let additions = generate(climb)
        .into_iter()
        .filter(|item| !present.contains(&normalize(&item.item_name)));

    merged.extend(additions);
    merged
}
