//! Gear planner - main coordinator for the recommendation pipeline
//!
//! Bundles the catalog with the engine operations so callers (route handlers,
//! UI actions) hold one object instead of wiring the modules themselves.
//! Stateless beyond the catalog: every method is a pure function of its
//! arguments, safe to call repeatedly and from multiple threads.

use crate::catalog::Catalog;
use crate::merge::merge;
use crate::recommend::generate;
use crate::types::{Climb, GearItem, WeightSummary};
use crate::weight::summarize_weights;
use anyhow::Result;
use std::path::Path;

/// Main gear planner
#[derive(Debug, Clone, Default)]
pub struct GearPlanner {
    catalog: Catalog,
}

impl GearPlanner {
    /// Planner backed by the built-in catalog
    pub fn new() -> Self {
        Self { catalog: Catalog::builtin() }
    }

    /// Planner backed by a caller-supplied catalog (e.g. with overrides)
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Planner with catalog overrides loaded from a JSON file
    pub fn with_overrides_file(path: &Path) -> Result<Self> {
        Ok(Self { catalog: Catalog::with_overrides_file(path)? })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommended gear list for a climb
    pub fn recommend(&self, climb: &Climb) -> Vec<GearItem> {
        generate(climb)
    }

    /// The "autofill" action: backfill the user's list, then append any
    /// recommendation not already present. Idempotent, so re-running after a
    /// failed save cannot double-add items.
    pub fn autofill(&self, existing: &[GearItem], climb: &Climb) -> Vec<GearItem> {
        merge(existing, climb, &self.catalog)
    }

    /// Weight summary for a gear list, planning and packed modes together
    pub fn weigh(&self, gear: &[GearItem], base_pack_weight_kg: f64) -> WeightSummary {
        summarize_weights(gear, base_pack_weight_kg)
    }
}
