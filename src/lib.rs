//! Gear Recommendation & Pack-Weight Engine
//!
//! Consolidates the gear logic that used to be duplicated (with drift) across
//! three UI layers into one pure, synchronous module tree:
//! - `utils/`: name normalization (the shared identity key)
//! - `catalog`: static defaults table + ordered heuristic fallback
//! - `recommend`: deterministic rule engine from climb attributes
//! - `backfill`: fill missing item metadata, never overwrite explicit values
//! - `merge`: union existing gear with recommendations, dedup by name
//! - `weight`: planning-mode and packed-mode aggregation
//!
//! The engine owns no persistent state and never mutates its inputs; storage,
//! HTTP, and rendering live with the callers.

pub mod utils;
pub mod types;
pub mod catalog;
pub mod recommend;
pub mod backfill;
pub mod merge;
pub mod weight;
pub mod planner;

// Re-export commonly used types
pub use utils::normalize;
pub use types::{
    Category, Climb, ClimbingStyle, Difficulty, GearItem, Importance, WeightSummary,
    gear_list_from_json,
};
pub use catalog::{Catalog, CatalogEntry};
pub use recommend::{generate, CRAMPON_ELEVATION_FT, HIGH_ELEVATION_FT};
pub use backfill::{backfill, backfill_all};
pub use merge::merge;
pub use weight::{packed_weight_kg, planning_weight_kg, summarize_weights, KG_TO_LB};
pub use planner::GearPlanner;
