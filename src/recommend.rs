//! Recommendation generator
//!
//! Derives a recommended gear list from a climb's attributes. Purely
//! deterministic: same climb in, same list out, no I/O and no randomness.
//!
//! Construction is append-only — each rule only ever adds items, so the
//! output order is stable and later rules can never drop something an
//! earlier rule decided was needed. Items created here carry their own
//! weight/importance/category fixed by the rule, independent of the catalog;
//! the catalog only backfills user-entered items.

use crate::types::{Category, Climb, ClimbingStyle, GearItem, Importance};
use crate::utils::normalize;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// At or above this elevation a climb counts as high-elevation
pub const HIGH_ELEVATION_FT: u32 = 10_000;

/// Crampon/ice-axe elevation threshold.
///
/// The UI layers this consolidates disagreed on this value; 11 000 ft is the
/// most complete variant and is kept as the single behavior. Product owners
/// deciding otherwise change this one constant.
pub const CRAMPON_ELEVATION_FT: u32 = 11_000;

/// Free-text terms that indicate snow/ice conditions
const SNOW_ICE_TERMS: &[&str] = &["snow", "ice", "glacier", "mixed", "nevé", "winter"];

/// Flags derived once from the climb, consumed by the rules below
#[derive(Debug, Clone)]
struct ClimbProfile {
    technical: bool,
    high_elevation: bool,
    mentions_snow_or_ice: bool,
    advanced_difficulty: bool,
    conditions_text: String,
}

impl ClimbProfile {
    fn from_climb(climb: &Climb) -> Self {
        let conditions_text = format!(
            "{} {}",
            climb.weather_concerns.to_lowercase(),
            climb.special_equipment.to_lowercase()
        );

        Self {
            technical: climb.climbing_style == ClimbingStyle::TechnicalClimb,
            high_elevation: climb.elevation_ft >= HIGH_ELEVATION_FT,
            mentions_snow_or_ice: SNOW_ICE_TERMS
                .iter()
                .any(|term| conditions_text.contains(term)),
            advanced_difficulty: climb.difficulty_level.is_advanced(),
            conditions_text,
        }
    }

    fn mentions_ice_or_mixed(&self) -> bool {
        self.conditions_text.contains("ice") || self.conditions_text.contains("mixed")
    }
}

/// Build one generated item. Required follows from importance; packing is a
/// user action, so generated items always start unpacked.
fn gear(name: &str, weight_kg: f64, importance: Importance, category: Category) -> GearItem {
    GearItem {
        item_name: name.to_string(),
        category: Some(category),
        quantity: 1,
        required: importance.is_required(),
        packed: false,
        importance: Some(importance),
        estimated_weight_kg: Some(weight_kg),
        notes: None,
    }
}

/// Generate the recommended gear list for a climb.
///
/// Rules are evaluated in a fixed order and only append; a final pass keeps
/// the first occurrence per normalized name. The rule set is disjoint by
/// construction, so the dedup is defensive rather than load-bearing.
pub fn generate(climb: &Climb) -> Vec<GearItem> {
    let profile = ClimbProfile::from_climb(climb);
    let mut items: Vec<GearItem> = Vec::with_capacity(24);

    // RULE 1: Universal base set, carried on every climb
    items.extend(base_set());

    // RULE 2: Exactly one footwear item
    if profile.technical || profile.high_elevation {
        items.push(gear("Mountaineering Boots", 2.0, Importance::Critical, Category::Technical));
    } else {
        items.push(gear("Hiking Boots", 1.2, Importance::Critical, Category::Clothing));
    }

    // RULE 3: Overnight trips need the camping bundle
    if climb.duration_days.is_some_and(|days| days >= 2) {
        items.extend(camping_bundle());
    }

    // RULE 4: Technical climbs need the full climbing bundle
    if profile.technical {
        items.extend(technical_bundle());
    }

    // RULE 5: Traction for high or icy ground
    if profile.high_elevation || profile.mentions_snow_or_ice {
        items.push(gear("Microspikes", 0.4, Importance::Recommended, Category::Technical));
    }

    // RULE 6: Crampons and ice axe for steep snow/ice travel
    if profile.technical
        || climb.elevation_ft >= CRAMPON_ELEVATION_FT
        || profile.mentions_snow_or_ice
        || profile.advanced_difficulty
    {
        items.push(gear("Crampons", 0.9, Importance::High, Category::Technical));
        items.push(gear("Ice Axe", 0.5, Importance::Recommended, Category::Technical));
    }

    // RULE 7: Ice tools only for technical ice/mixed or hard routes
    if profile.technical && (profile.mentions_ice_or_mixed() || profile.advanced_difficulty) {
        items.push(gear("Ice Tools (pair)", 1.3, Importance::High, Category::Technical));
    }

    // RULE 8: Gaiters for snow or altitude
    if profile.mentions_snow_or_ice || profile.high_elevation {
        items.push(gear("Gaiters", 0.3, Importance::Recommended, Category::Clothing));
    }

    // RULE 9: Storm forecast → spare insulation
    if climb.weather_concerns.to_lowercase().contains("storm") {
        items.push(gear("Extra Layers", 0.8, Importance::Recommended, Category::Clothing));
    }

    // RULE 10: Larger parties carry a shared shelter
    if climb.group_size.is_some_and(|size| size > 2) {
        items.push(gear("Group Emergency Shelter", 1.4, Importance::High, Category::Safety));
    }

    dedup_first_occurrence(items)
}

/// The nine items every climb gets, regardless of attributes
fn base_set() -> SmallVec<[GearItem; 9]> {
    let mut set = SmallVec::new();
    set.push(gear("First Aid Kit", 0.5, Importance::Critical, Category::Safety));
    set.push(gear("Water (3L)", 3.0, Importance::Critical, Category::FoodWater));
    set.push(gear("Trail Food", 1.0, Importance::Critical, Category::FoodWater));
    set.push(gear("Map & Compass", 0.3, Importance::Critical, Category::Navigation));
    set.push(gear("Headlamp", 0.1, Importance::Critical, Category::Safety));
    set.push(gear("Insulating Layer", 0.5, Importance::High, Category::Clothing));
    set.push(gear("Rain Shell", 0.4, Importance::High, Category::Clothing));
    set.push(gear("Gloves & Hat", 0.3, Importance::High, Category::Clothing));
    set.push(gear("Trekking Poles", 0.5, Importance::Recommended, Category::Other));
    set
}

/// Sleep system and kitchen for trips of two days or more
fn camping_bundle() -> SmallVec<[GearItem; 5]> {
    let mut bundle = SmallVec::new();
    bundle.push(gear("Tent or Bivy", 2.5, Importance::High, Category::Camping));
    bundle.push(gear("Sleeping Bag", 1.5, Importance::High, Category::Camping));
    bundle.push(gear("Sleeping Pad", 0.6, Importance::High, Category::Camping));
    bundle.push(gear("Stove & Fuel", 0.8, Importance::High, Category::Camping));
    bundle.push(gear("Cook Kit", 0.5, Importance::Recommended, Category::Camping));
    bundle
}

/// Rope-work kit for technical climbs
fn technical_bundle() -> SmallVec<[GearItem; 6]> {
    let mut bundle = SmallVec::new();
    bundle.push(gear("Climbing Helmet", 0.4, Importance::Critical, Category::Safety));
    bundle.push(gear("Climbing Harness", 0.4, Importance::Critical, Category::Technical));
    bundle.push(gear("Belay Device & Carabiners", 0.4, Importance::Critical, Category::Technical));
    bundle.push(gear("Climbing Rope (60m)", 3.8, Importance::Critical, Category::Technical));
    bundle.push(gear("Quickdraws", 1.2, Importance::High, Category::Technical));
    bundle.push(gear("Protection Rack", 2.0, Importance::High, Category::Technical));
    bundle
}

/// Keep only the first occurrence of each normalized name
fn dedup_first_occurrence(items: Vec<GearItem>) -> Vec<GearItem> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    items
        .into_iter()
        .filter(|item| seen.insert(normalize(&item.item_name)))
        .collect()
}
