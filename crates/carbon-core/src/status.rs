//! Point-in-time carbon status of an area under a given land use.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{
    LandUseCategory, SOIL_STORAGE_FRACTION, TREE_STORAGE_FRACTION,
};

/// Carbon stock and annual flux for (category, area). A pure projection:
/// recomputed on every query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonStatus {
    /// Total standing carbon stock (tC).
    pub total_storage: f64,
    /// Woody-biomass share of the stock (tC).
    pub tree_storage: f64,
    /// Soil share of the stock (tC).
    pub soil_storage: f64,
    /// Annual sequestration over the whole area (tC/yr).
    pub total_absorption: f64,
    /// Annual release over the whole area (tC/yr).
    pub total_emission: f64,
    /// Annual absorption minus emission (tC/yr).
    pub net_balance: f64,
    /// Area the status was computed for (ha).
    pub area_ha: f64,
    pub category: LandUseCategory,
}

/// Compute the carbon status of `area_ha` hectares of `category` land.
/// Total for every category and every area ≥ 0; zero area yields an
/// all-zero status rather than an error.
pub fn compute_status(category: LandUseCategory, area_ha: f64) -> CarbonStatus {
    let coef = category.coefficients();

    let total_storage = coef.storage * area_ha;
    let total_absorption = coef.absorption * area_ha;
    let total_emission = coef.emission * area_ha;

    CarbonStatus {
        total_storage,
        tree_storage: total_storage * TREE_STORAGE_FRACTION,
        soil_storage: total_storage * SOIL_STORAGE_FRACTION,
        total_absorption,
        total_emission,
        net_balance: total_absorption - total_emission,
        area_ha,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Storage scales linearly with area and partitions exactly into
    /// tree + soil shares, for every category.
    #[test]
    fn storage_scales_and_partitions() {
        for cat in LandUseCategory::ALL {
            for area in [0.0, 0.5, 1.0, 2.0, 123.4] {
                let s = compute_status(cat, area);
                assert_relative_eq!(
                    s.total_storage,
                    cat.coefficients().storage * area,
                    max_relative = 1e-12
                );
                assert_relative_eq!(
                    s.tree_storage + s.soil_storage,
                    s.total_storage,
                    max_relative = 1e-12
                );
            }
        }
    }

    /// Net balance is absorption minus emission.
    #[test]
    fn net_balance_formula() {
        let s = compute_status(LandUseCategory::Agricultural, 10.0);
        assert_relative_eq!(s.total_absorption, 20.0);
        assert_relative_eq!(s.total_emission, 10.0);
        assert_relative_eq!(s.net_balance, 10.0);
    }

    /// Zero area yields an all-zero status, not an error.
    #[test]
    fn zero_area_is_all_zero() {
        let s = compute_status(LandUseCategory::Forest, 0.0);
        assert_eq!(s.total_storage, 0.0);
        assert_eq!(s.tree_storage, 0.0);
        assert_eq!(s.soil_storage, 0.0);
        assert_eq!(s.total_absorption, 0.0);
        assert_eq!(s.total_emission, 0.0);
        assert_eq!(s.net_balance, 0.0);
    }

    /// Forest reference numbers: 150/8/0 per hectare.
    #[test]
    fn forest_reference_values() {
        let s = compute_status(LandUseCategory::Forest, 2.0);
        assert_relative_eq!(s.total_storage, 300.0);
        assert_relative_eq!(s.tree_storage, 210.0);
        assert_relative_eq!(s.soil_storage, 90.0);
        assert_relative_eq!(s.total_absorption, 16.0);
        assert_relative_eq!(s.net_balance, 16.0);
    }
}
