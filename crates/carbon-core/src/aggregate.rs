//! Dominant-category analysis over a set of classified features.
//!
//! Classifies each feature, accumulates area per resulting category, and
//! ranks categories by accumulated area. The first feature to land in a
//! category donates its display label; later features only add area, even
//! when their raw names differ.

use serde::{Deserialize, Serialize};

use crate::classify::classify_feature;
use crate::feature::RawLandCoverFeature;
use crate::taxonomy::LandUseCategory;

/// One entry of the ranked breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: LandUseCategory,
    /// Raw name of the first feature classified into this category, or the
    /// taxonomy label when that feature had no name.
    pub label: String,
    /// Accumulated area (ha).
    pub area_ha: f64,
    /// Share of the queried area (0–100). Defined as 0 when the total
    /// queried area is 0.
    pub ratio_percent: f64,
}

/// Ranked land-cover breakdown of a queried area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiotopAnalysis {
    /// Largest-area entry of `breakdown`.
    pub dominant: CategoryShare,
    /// All entries, by accumulated area descending; ties keep first-seen
    /// order.
    pub breakdown: Vec<CategoryShare>,
}

/// Analyze a feature set covering a queried area of `total_area_ha`.
///
/// Returns `None` when there is no evidence to rank: an empty input, or
/// one consisting solely of blank records (no code and no name). Blank
/// records inside an otherwise usable set are skipped silently.
pub fn aggregate(
    features: &[RawLandCoverFeature],
    total_area_ha: f64,
) -> Option<BiotopAnalysis> {
    // Insertion-ordered accumulation; at most 7 slots, linear scan is fine.
    let mut slots: Vec<(LandUseCategory, String, f64)> = Vec::new();

    for feature in features {
        if feature.is_blank() {
            continue;
        }
        let category = classify_feature(feature);
        match slots.iter_mut().find(|(cat, _, _)| *cat == category) {
            Some((_, _, area)) => *area += feature.area_ha,
            None => {
                let label = if feature.name.trim().is_empty() {
                    category.coefficients().label.to_string()
                } else {
                    feature.name.trim().to_string()
                };
                slots.push((category, label, feature.area_ha));
            }
        }
    }

    if slots.is_empty() {
        return None;
    }

    // Stable sort keeps first-seen order among equal areas.
    slots.sort_by(|a, b| b.2.total_cmp(&a.2));

    let breakdown: Vec<CategoryShare> = slots
        .into_iter()
        .map(|(category, label, area_ha)| CategoryShare {
            category,
            label,
            area_ha,
            ratio_percent: if total_area_ha == 0.0 {
                0.0
            } else {
                area_ha / total_area_ha * 100.0
            },
        })
        .collect();

    Some(BiotopAnalysis { dominant: breakdown[0].clone(), breakdown })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use LandUseCategory::*;

    fn feature(code: &str, name: &str, area_ha: f64) -> RawLandCoverFeature {
        RawLandCoverFeature { code: code.into(), name: name.into(), area_ha }
    }

    /// Empty input signals "insufficient evidence".
    #[test]
    fn empty_input_is_none() {
        assert_eq!(aggregate(&[], 10.0), None);
        assert_eq!(aggregate(&[], 0.0), None);
    }

    /// Reference dominance case: Forest 3 + 2 ha vs Grassland 1 ha over
    /// a 6 ha query.
    #[test]
    fn forest_dominates_reference_case() {
        let features = [
            feature("F1", "자연산림", 3.0),
            feature("F2", "인공산림", 2.0),
            feature("G1", "초지", 1.0),
        ];
        let analysis = aggregate(&features, 6.0).unwrap();

        assert_eq!(analysis.dominant.category, Forest);
        assert_relative_eq!(analysis.dominant.area_ha, 5.0);
        assert_relative_eq!(analysis.dominant.ratio_percent, 83.0 + 1.0 / 3.0, max_relative = 1e-9);
        assert_eq!(analysis.breakdown.len(), 2);
        assert_eq!(analysis.breakdown[1].category, Grassland);
    }

    /// The first feature seen per category donates the display label.
    #[test]
    fn first_seen_label_wins() {
        let features = [
            feature("F1", "상록침엽수림", 1.0),
            feature("F2", "낙엽활엽수림", 4.0),
        ];
        let analysis = aggregate(&features, 5.0).unwrap();
        assert_eq!(analysis.dominant.label, "상록침엽수림");
        assert_relative_eq!(analysis.dominant.area_ha, 5.0);
    }

    /// Area ties keep first-seen order.
    #[test]
    fn ties_keep_insertion_order() {
        let features = [
            feature("W1", "하천습지", 2.0),
            feature("A1", "논", 2.0),
        ];
        let analysis = aggregate(&features, 4.0).unwrap();
        assert_eq!(analysis.breakdown[0].category, Wetland);
        assert_eq!(analysis.breakdown[1].category, Agricultural);
    }

    /// Blank records are skipped, not fatal; all-blank input is None.
    #[test]
    fn blank_records_are_skipped() {
        let features = [
            feature("", "", 100.0),
            feature("G1", "초지", 1.0),
        ];
        let analysis = aggregate(&features, 1.0).unwrap();
        assert_eq!(analysis.breakdown.len(), 1);
        assert_eq!(analysis.dominant.category, Grassland);

        assert_eq!(aggregate(&[feature("", "", 5.0)], 5.0), None);
    }

    /// Zero queried area defines every ratio as 0 instead of dividing.
    #[test]
    fn zero_total_area_zeroes_ratios() {
        let features = [feature("F1", "산림", 2.0)];
        let analysis = aggregate(&features, 0.0).unwrap();
        assert_eq!(analysis.dominant.ratio_percent, 0.0);
        assert_relative_eq!(analysis.dominant.area_ha, 2.0);
    }

    /// A nameless feature falls back to the taxonomy label.
    #[test]
    fn nameless_feature_uses_taxonomy_label() {
        let features = [feature("R1", "", 1.5)];
        let analysis = aggregate(&features, 1.5).unwrap();
        assert_eq!(analysis.dominant.category, Residential);
        assert_eq!(analysis.dominant.label, "주거지");
    }
}
