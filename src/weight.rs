//! Pack-weight aggregation
//!
//! Two consumers with two different questions: trip planning wants the full
//! estimated load ("planning mode"), the packing checklist wants only what is
//! already in the pack ("packed mode"). Both are computed over the same list
//! and returned in a single summary record.
//!
//! Per-item contribution is `weight × max(quantity, 1)`, where an unknown
//! weight (missing/zero/negative) contributes 0. Counts are plain item
//! tallies, unweighted by quantity.

use crate::types::{GearItem, WeightSummary};

/// Fixed kg → lb conversion factor
pub const KG_TO_LB: f64 = 2.20462;

/// Planning mode: base pack weight plus every item's load
pub fn planning_weight_kg(gear: &[GearItem], base_pack_weight_kg: f64) -> f64 {
    base_pack_weight_kg + gear.iter().map(GearItem::load_kg).sum::<f64>()
}

/// Packed mode: base pack weight plus only the items marked packed
pub fn packed_weight_kg(gear: &[GearItem], base_pack_weight_kg: f64) -> f64 {
    base_pack_weight_kg
        + gear
            .iter()
            .filter(|item| item.packed)
            .map(GearItem::load_kg)
            .sum::<f64>()
}

/// Compute both aggregation modes plus item counts in one pass record
pub fn summarize_weights(gear: &[GearItem], base_pack_weight_kg: f64) -> WeightSummary {
    let total_weight_kg = planning_weight_kg(gear, base_pack_weight_kg);
    let packed_weight_kg = packed_weight_kg(gear, base_pack_weight_kg);

    WeightSummary {
        total_weight_kg,
        packed_weight_kg,
        remaining_weight_kg: (total_weight_kg - packed_weight_kg).max(0.0),
        total_weight_lb: total_weight_kg * KG_TO_LB,
        packed_weight_lb: packed_weight_kg * KG_TO_LB,
        packed_count: gear.iter().filter(|item| item.packed).count(),
        total_count: gear.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn item(weight: Option<f64>, quantity: u32, packed: bool) -> GearItem {
        GearItem {
            item_name: "Test Item".to_string(),
            category: None,
            quantity,
            required: false,
            packed,
            importance: None,
            estimated_weight_kg: weight,
            notes: None,
        }
    }

    #[test]
    fn test_two_modes_diverge_on_packed_flag() {
        let gear = vec![item(Some(3.0), 1, true), item(Some(0.5), 2, false)];
        let summary = summarize_weights(&gear, 1.2);

        assert_relative_eq!(summary.packed_weight_kg, 4.2, epsilon = 1e-9);
        assert_relative_eq!(summary.total_weight_kg, 5.2, epsilon = 1e-9);
        assert_relative_eq!(summary.remaining_weight_kg, 1.0, epsilon = 1e-9);
        assert_eq!(summary.packed_count, 1);
        assert_eq!(summary.total_count, 2);
    }

    #[test]
    fn test_pound_conversion_uses_fixed_factor() {
        let gear = vec![item(Some(2.0), 1, true)];
        let summary = summarize_weights(&gear, 0.0);

        assert_relative_eq!(summary.total_weight_lb, 2.0 * KG_TO_LB, epsilon = 1e-9);
        assert_relative_eq!(summary.packed_weight_lb, 2.0 * KG_TO_LB, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_weight_contributes_zero() {
        let gear = vec![
            item(None, 4, true),
            item(Some(0.0), 1, true),
            item(Some(-3.0), 1, true),
            item(Some(1.0), 0, true), // zero quantity counts as one unit
        ];
        let summary = summarize_weights(&gear, 0.5);

        assert_relative_eq!(summary.packed_weight_kg, 1.5, epsilon = 1e-9);
        assert_eq!(summary.packed_count, 4);
        assert_eq!(summary.total_count, 4);
    }

    #[test]
    fn test_empty_list_is_just_base_weight() {
        let summary = summarize_weights(&[], 2.5);
        assert_relative_eq!(summary.total_weight_kg, 2.5, epsilon = 1e-9);
        assert_relative_eq!(summary.packed_weight_kg, 2.5, epsilon = 1e-9);
        assert_relative_eq!(summary.remaining_weight_kg, 0.0, epsilon = 1e-9);
        assert_eq!(summary.total_count, 0);
    }

    #[test]
    fn test_remaining_never_negative() {
        // Packed quantity semantics can't push packed above total here, but a
        // caller-supplied negative base weight could; clamp holds regardless
        let gear = vec![item(Some(1.0), 1, true)];
        let summary = summarize_weights(&gear, 0.0);
        assert!(summary.remaining_weight_kg >= 0.0);
    }
}
