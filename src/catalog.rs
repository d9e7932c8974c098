//! Gear catalog and heuristic defaults
//!
//! The catalog is a static table of default weight/importance/category per
//! known normalized item name. It is strictly a source of defaults for the
//! backfill resolver: it never overrides a value the user already set.
//!
//! Lookup runs in two stages: exact match against the table, then an ordered
//! list of substring rules evaluated first-match-wins. The previous UI layers
//! each carried their own drifted if/else chain for stage two; the rule slice
//! here is the single consolidated replacement. When neither stage matches,
//! lookup returns `None` and callers must leave the field unset.

use crate::types::{Category, Importance};
use crate::utils::normalize;
use ahash::AHashMap;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default metadata for one known item name
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub weight_kg: f64,
    pub importance: Importance,
    pub category: Category,
}

const fn entry(weight_kg: f64, importance: Importance, category: Category) -> CatalogEntry {
    CatalogEntry { weight_kg, importance, category }
}

use Category::*;
use Importance::*;

/// Built-in defaults table, keyed by normalized name.
///
/// Weights are typical mid-range values in kg; they only seed items whose
/// weight the user never entered.
const BUILTIN_ENTRIES: &[(&str, CatalogEntry)] = &[
    // Universal carry
    ("first aid kit", entry(0.5, Critical, Safety)),
    ("water 3l", entry(3.0, Critical, FoodWater)),
    ("water 2l", entry(2.0, Critical, FoodWater)),
    ("trail food", entry(1.0, Critical, FoodWater)),
    ("map compass", entry(0.3, Critical, Navigation)),
    ("gps device", entry(0.2, High, Navigation)),
    ("satellite messenger", entry(0.1, High, Safety)),
    ("headlamp", entry(0.1, Critical, Safety)),
    ("insulating layer", entry(0.5, High, Clothing)),
    ("rain shell", entry(0.4, High, Clothing)),
    ("gloves hat", entry(0.3, High, Clothing)),
    ("trekking poles", entry(0.5, Recommended, Other)),
    ("sunscreen", entry(0.1, High, Health)),
    ("sunglasses", entry(0.1, High, Health)),
    // Footwear
    ("hiking boots", entry(1.2, Critical, Clothing)),
    ("mountaineering boots", entry(2.0, Critical, Technical)),
    // Camping
    ("tent or bivy", entry(2.5, High, Camping)),
    ("sleeping bag", entry(1.5, High, Camping)),
    ("sleeping pad", entry(0.6, High, Camping)),
    ("stove fuel", entry(0.8, High, Camping)),
    ("cook kit", entry(0.5, Recommended, Camping)),
    // Technical climbing
    ("climbing helmet", entry(0.4, Critical, Safety)),
    ("climbing harness", entry(0.4, Critical, Technical)),
    ("belay device carabiners", entry(0.4, Critical, Technical)),
    ("climbing rope 60m", entry(3.8, Critical, Technical)),
    ("quickdraws", entry(1.2, High, Technical)),
    ("protection rack", entry(2.0, High, Technical)),
    // Snow and ice
    ("microspikes", entry(0.4, Recommended, Technical)),
    ("crampons", entry(0.9, High, Technical)),
    ("ice axe", entry(0.5, Recommended, Technical)),
    ("ice tools pair", entry(1.3, High, Technical)),
    ("gaiters", entry(0.3, Recommended, Clothing)),
    ("extra layers", entry(0.8, Recommended, Clothing)),
    ("group emergency shelter", entry(1.4, High, Safety)),
];

/// Substring predicate for one heuristic rule
#[derive(Debug, Clone, Copy)]
enum NamePattern {
    Contains(&'static str),
    ContainsAll(&'static [&'static str]),
}

impl NamePattern {
    fn matches(self, normalized: &str) -> bool {
        match self {
            NamePattern::Contains(needle) => normalized.contains(needle),
            NamePattern::ContainsAll(needles) => {
                needles.iter().all(|needle| normalized.contains(needle))
            }
        }
    }
}

/// One fallback rule: substring pattern → defaults
#[derive(Debug, Clone, Copy)]
struct HeuristicRule {
    pattern: NamePattern,
    defaults: CatalogEntry,
}

/// Ordered fallback rules for names with no exact catalog entry.
///
/// Evaluated top to bottom, first match wins, so "water bottle" resolves to
/// hydration defaults before anything else gets a look. Keep new rules below
/// more specific existing ones.
const HEURISTIC_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        pattern: NamePattern::Contains("water"),
        defaults: entry(2.0, Critical, FoodWater),
    },
    HeuristicRule {
        pattern: NamePattern::Contains("quickdraw"),
        defaults: entry(1.2, High, Technical),
    },
    HeuristicRule {
        pattern: NamePattern::Contains("rope"),
        defaults: entry(3.8, Critical, Technical),
    },
    HeuristicRule {
        pattern: NamePattern::Contains("crampon"),
        defaults: entry(0.9, High, Technical),
    },
    HeuristicRule {
        pattern: NamePattern::ContainsAll(&["micro", "spike"]),
        defaults: entry(0.4, Recommended, Technical),
    },
    HeuristicRule {
        pattern: NamePattern::Contains("ice axe"),
        defaults: entry(0.5, Recommended, Technical),
    },
    HeuristicRule {
        pattern: NamePattern::Contains("gaiter"),
        defaults: entry(0.3, Recommended, Clothing),
    },
];

/// Catalog of per-item defaults, exact table plus heuristic fallback
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: AHashMap<String, CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog with only the built-in table. No I/O.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(name, entry)| {
                debug_assert_eq!(normalize(name), *name, "builtin key not normalized");
                (name.to_string(), *entry)
            })
            .collect();

        Self { entries }
    }

    /// Built-in table with a JSON override map layered on top.
    ///
    /// The overrides file maps item names to `{weight_kg, importance,
    /// category}`; keys are normalized before insertion, so display names
    /// work as keys. An override with a non-positive weight is rejected.
    pub fn with_overrides_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog overrides file: {:?}", path))?;

        Self::with_overrides_json(&contents)
            .with_context(|| format!("Failed to parse catalog overrides file: {:?}", path))
    }

    /// Built-in table with overrides parsed from a JSON string
    pub fn with_overrides_json(json: &str) -> Result<Self> {
        let overrides: std::collections::HashMap<String, CatalogEntry> =
            serde_json::from_str(json).with_context(|| "Failed to parse catalog overrides JSON")?;

        let mut catalog = Self::builtin();
        for (name, entry) in overrides {
            if !(entry.weight_kg > 0.0) {
                anyhow::bail!(
                    "Catalog override '{}' has non-positive weight_kg {}",
                    name,
                    entry.weight_kg
                );
            }
            let key = normalize(&name);
            if key.is_empty() {
                anyhow::bail!("Catalog override key '{}' normalizes to empty", name);
            }
            catalog.entries.insert(key, entry);
        }

        Ok(catalog)
    }

    /// Look up default metadata for an item name.
    ///
    /// Exact match on the normalized name first, then the ordered heuristic
    /// rules. `None` means the name is genuinely unknown; callers must not
    /// invent a default in that case.
    pub fn lookup_defaults(&self, name: &str) -> Option<CatalogEntry> {
        let key = normalize(name);
        if key.is_empty() {
            return None;
        }

        if let Some(entry) = self.entries.get(&key) {
            return Some(*entry);
        }

        HEURISTIC_RULES
            .iter()
            .find(|rule| rule.pattern.matches(&key))
            .map(|rule| rule.defaults)
    }

    /// Number of known exact entries (built-in plus overrides)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
