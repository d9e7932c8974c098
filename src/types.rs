//! Core model types for gear planning
//!
//! `Climb` is the read-only input record; `GearItem` is the unit the engine
//! generates, backfills, merges, and weighs. The persisted gear list arrives
//! as an opaque JSON blob, so this module also owns the lenient decoder that
//! turns that blob into typed items without ever failing on malformed data.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty rating of a climb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Extreme,
}

impl Difficulty {
    /// Advanced/expert/extreme climbs trigger the heavier equipment rules
    pub fn is_advanced(self) -> bool {
        matches!(self, Difficulty::Advanced | Difficulty::Expert | Difficulty::Extreme)
    }
}

/// Style of the climb, which drives the shape of the recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimbingStyle {
    DayHike,
    Overnight,
    MultiDay,
    Expedition,
    TechnicalClimb,
}

/// Gear category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Safety,
    Clothing,
    Technical,
    Camping,
    Navigation,
    Health,
    FoodWater,
    Other,
}

/// How strongly an item is recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Critical,
    High,
    Recommended,
    Optional,
}

impl Importance {
    /// Critical and high-importance items are marked required when generated
    pub fn is_required(self) -> bool {
        matches!(self, Importance::Critical | Importance::High)
    }
}

/// Error for categorical fields that arrive as unrecognized strings
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized {field} value: '{value}'")]
pub struct ParseEnumError {
    pub field: &'static str,
    pub value: String,
}

macro_rules! impl_enum_str {
    ($ty:ident, $field:expr, { $($text:expr => $variant:ident),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    other => Err(ParseEnumError {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let text = match self {
                    $($ty::$variant => $text,)+
                };
                f.write_str(text)
            }
        }
    };
}

impl_enum_str!(Difficulty, "difficulty_level", {
    "beginner" => Beginner,
    "intermediate" => Intermediate,
    "advanced" => Advanced,
    "expert" => Expert,
    "extreme" => Extreme,
});

impl_enum_str!(ClimbingStyle, "climbing_style", {
    "day_hike" => DayHike,
    "overnight" => Overnight,
    "multi_day" => MultiDay,
    "expedition" => Expedition,
    "technical_climb" => TechnicalClimb,
});

impl_enum_str!(Category, "category", {
    "safety" => Safety,
    "clothing" => Clothing,
    "technical" => Technical,
    "camping" => Camping,
    "navigation" => Navigation,
    "health" => Health,
    "food_water" => FoodWater,
    "other" => Other,
});

impl_enum_str!(Importance, "importance", {
    "critical" => Critical,
    "high" => High,
    "recommended" => Recommended,
    "optional" => Optional,
});

/// Read-only climb attributes consumed by the recommendation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Climb {
    pub mountain_name: String,
    pub elevation_ft: u32,
    #[serde(default)]
    pub duration_days: Option<u32>,
    pub difficulty_level: Difficulty,
    pub climbing_style: ClimbingStyle,
    #[serde(default)]
    pub group_size: Option<u32>,
    #[serde(default)]
    pub weather_concerns: String,
    #[serde(default)]
    pub special_equipment: String,
    #[serde(default)]
    pub base_pack_weight_kg: f64,
}

/// A single piece of gear, either user-entered or generated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearItem {
    pub item_name: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub packed: bool,
    #[serde(default)]
    pub importance: Option<Importance>,
    #[serde(default)]
    pub estimated_weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl GearItem {
    /// Weight in kg that this item contributes to a pack total.
    ///
    /// Unknown weight (missing, zero, or negative) contributes 0; a zero
    /// quantity still counts as a single item.
    pub fn load_kg(&self) -> f64 {
        let per_unit = match self.estimated_weight_kg {
            Some(w) if w > 0.0 => w,
            _ => 0.0,
        };
        per_unit * self.quantity.max(1) as f64
    }

    /// Whether the stored weight is a valid explicit value (positive)
    pub fn has_explicit_weight(&self) -> bool {
        matches!(self.estimated_weight_kg, Some(w) if w > 0.0)
    }
}

/// Pack-weight summary covering both aggregation modes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    pub total_weight_kg: f64,
    pub packed_weight_kg: f64,
    pub remaining_weight_kg: f64,
    pub total_weight_lb: f64,
    pub packed_weight_lb: f64,
    pub packed_count: usize,
    pub total_count: usize,
}

/// Decode the persisted `required_gear` blob into typed items.
///
/// The column is opaque JSON written by several UI layers, so nothing about
/// its shape can be trusted. Anything that is not an array decodes to an
/// empty list; per item, malformed numeric fields fall back to their
/// identity (weight stays unknown, quantity becomes 1), unrecognized
/// categorical strings stay unset, and entries with no usable name are
/// skipped entirely. This function never fails.
pub fn gear_list_from_json(value: &Value) -> Vec<GearItem> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };

    entries.iter().filter_map(decode_gear_entry).collect()
}

fn decode_gear_entry(entry: &Value) -> Option<GearItem> {
    let obj = entry.as_object()?;

    let item_name = obj
        .get("item_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())?
        .to_string();

    Some(GearItem {
        item_name,
        category: decode_enum(obj.get("category")),
        quantity: decode_quantity(obj.get("quantity")),
        required: obj.get("required").and_then(Value::as_bool).unwrap_or(false),
        packed: obj.get("packed").and_then(Value::as_bool).unwrap_or(false),
        importance: decode_enum(obj.get("importance")),
        estimated_weight_kg: decode_weight(obj.get("estimated_weight_kg")),
        notes: obj
            .get("notes")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

fn decode_enum<T: FromStr>(value: Option<&Value>) -> Option<T> {
    value
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<T>().ok())
}

fn decode_quantity(value: Option<&Value>) -> u32 {
    match value.and_then(Value::as_f64) {
        Some(q) if q >= 1.0 => q as u32,
        _ => 1,
    }
}

fn decode_weight(value: Option<&Value>) -> Option<f64> {
    // Zero and negative weights are stored by some callers to mean "unknown"
    value.and_then(Value::as_f64).filter(|w| w.is_finite() && *w > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_round_trip_snake_case() {
        let style: ClimbingStyle = serde_json::from_str("\"technical_climb\"").unwrap();
        assert_eq!(style, ClimbingStyle::TechnicalClimb);
        assert_eq!(serde_json::to_string(&Category::FoodWater).unwrap(), "\"food_water\"");
        assert_eq!("extreme".parse::<Difficulty>().unwrap(), Difficulty::Extreme);
        assert!("vertical".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_gear_list_from_json_non_array() {
        assert!(gear_list_from_json(&Value::Null).is_empty());
        assert!(gear_list_from_json(&json!({"item_name": "Rope"})).is_empty());
        assert!(gear_list_from_json(&json!("gear")).is_empty());
    }

    #[test]
    fn test_gear_list_from_json_lenient_fields() {
        let blob = json!([
            {
                "item_name": "Crampons",
                "quantity": "two",
                "estimated_weight_kg": -1.0,
                "category": "technical",
                "importance": "mandatory",
                "packed": true
            },
            { "item_name": "   " },
            { "quantity": 3 }
        ]);

        let gear = gear_list_from_json(&blob);
        assert_eq!(gear.len(), 1);

        let item = &gear[0];
        assert_eq!(item.item_name, "Crampons");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.estimated_weight_kg, None);
        assert_eq!(item.category, Some(Category::Technical));
        assert_eq!(item.importance, None);
        assert!(item.packed);
        assert!(!item.required);
    }

    #[test]
    fn test_load_kg_unknown_weight_contributes_zero() {
        let mut item = GearItem {
            item_name: "Mystery".to_string(),
            category: None,
            quantity: 0,
            required: false,
            packed: false,
            importance: None,
            estimated_weight_kg: None,
            notes: None,
        };
        assert_eq!(item.load_kg(), 0.0);

        item.estimated_weight_kg = Some(0.5);
        // Zero quantity still counts as one unit
        assert_eq!(item.load_kg(), 0.5);

        item.quantity = 3;
        assert_eq!(item.load_kg(), 1.5);
    }
}
