//! Carbon effect of converting an area from one land use to another over
//! a time horizon.
//!
//! The model is deliberately simple: only a *decrease* in standing stock
//! triggers an immediate release, half of the lost stock is released at
//! conversion time (the remainder is assumed to decay over decades and is
//! not separately modeled), and annual fluxes change step-wise to the new
//! category's coefficients.

use serde::{Deserialize, Serialize};

use crate::status::{compute_status, CarbonStatus};
use crate::taxonomy::{
    LandUseCategory, CAR_ANNUAL_CO2, C_TO_CO2, HOUSEHOLD_ANNUAL_CO2,
    IMMEDIATE_RELEASE_FRACTION, TREE_CARBON_30Y,
};

/// Full result of a conversion simulation. Recomputed per request, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonChangeResult {
    /// One-time release from stock loss at conversion (tC, ≥ 0).
    pub immediate_emission: f64,
    /// Change in annual sequestration, after minus before (tC/yr).
    pub annual_absorption_change: f64,
    /// Change in annual release, after minus before (tC/yr).
    pub annual_emission_change: f64,
    /// Net annual flux change (tC/yr).
    pub net_annual_change: f64,
    /// Cumulative carbon change over the horizon (tC); the one-time
    /// release is subtracted once, not annualized.
    pub cumulative_change: f64,
    /// Cumulative change expressed as CO2 mass (tCO2).
    pub cumulative_change_co2: f64,
    /// |cumulative change| expressed as 30-year pines.
    pub equivalent_trees: u64,
    /// |cumulative CO2 change| expressed as car-years of driving.
    pub equivalent_cars: u64,
    /// |cumulative CO2 change| expressed as household-years.
    pub equivalent_households: u64,
    pub before_status: CarbonStatus,
    pub after_status: CarbonStatus,
}

/// Simulate converting `area_ha` hectares from `before` to `after` over
/// `years` years.
///
/// Total over the whole input domain: `years = 0` degenerates to
/// `cumulative_change = -immediate_emission`, and a no-op conversion
/// (`before == after`) yields all-zero changes.
pub fn compute_change(
    before: LandUseCategory,
    after: LandUseCategory,
    area_ha: f64,
    years: u32,
) -> CarbonChangeResult {
    let before_coef = before.coefficients();
    let after_coef = after.coefficients();

    let before_status = compute_status(before, area_ha);
    let after_status = compute_status(after, area_ha);

    // Only a decrease in standing stock releases carbon; a gain is banked
    // gradually through the flux terms, never as a negative "emission".
    let storage_loss = (before_coef.storage - after_coef.storage).max(0.0) * area_ha;
    let immediate_emission = storage_loss * IMMEDIATE_RELEASE_FRACTION;

    let annual_absorption_change = (after_coef.absorption - before_coef.absorption) * area_ha;
    let annual_emission_change = (after_coef.emission - before_coef.emission) * area_ha;
    let net_annual_change = annual_absorption_change - annual_emission_change;

    let cumulative_change = net_annual_change * f64::from(years) - immediate_emission;
    let cumulative_change_co2 = cumulative_change * C_TO_CO2;

    CarbonChangeResult {
        immediate_emission,
        annual_absorption_change,
        annual_emission_change,
        net_annual_change,
        cumulative_change,
        cumulative_change_co2,
        equivalent_trees: (cumulative_change.abs() / TREE_CARBON_30Y).round() as u64,
        equivalent_cars: (cumulative_change_co2.abs() / CAR_ANNUAL_CO2).round() as u64,
        equivalent_households: (cumulative_change_co2.abs() / HOUSEHOLD_ANNUAL_CO2).round()
            as u64,
        before_status,
        after_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use LandUseCategory::*;

    /// Converting a category to itself changes nothing, for every
    /// category, area, and horizon.
    #[test]
    fn noop_conversion_is_all_zero() {
        for cat in LandUseCategory::ALL {
            for years in [0, 1, 30] {
                let r = compute_change(cat, cat, 7.3, years);
                assert_eq!(r.immediate_emission, 0.0, "{cat} {years}y");
                assert_eq!(r.net_annual_change, 0.0);
                assert_eq!(r.cumulative_change, 0.0);
                assert_eq!(r.equivalent_trees, 0);
            }
        }
    }

    /// A stock gain never produces a negative immediate emission.
    #[test]
    fn stock_gain_has_no_immediate_emission() {
        for before in LandUseCategory::ALL {
            for after in LandUseCategory::ALL {
                let r = compute_change(before, after, 5.0, 10);
                if after.coefficients().storage >= before.coefficients().storage {
                    assert_eq!(
                        r.immediate_emission, 0.0,
                        "{before} -> {after} should release nothing immediately"
                    );
                } else {
                    assert!(r.immediate_emission > 0.0, "{before} -> {after}");
                }
            }
        }
    }

    /// Worked Forest → Residential scenario: 2 ha, 30 years.
    #[test]
    fn forest_to_residential_reference_scenario() {
        let r = compute_change(Forest, Residential, 2.0, 30);

        // storage loss (150-10)×2 = 280, half released immediately
        assert_relative_eq!(r.immediate_emission, 140.0);
        assert_relative_eq!(r.annual_absorption_change, -15.0);
        assert_relative_eq!(r.annual_emission_change, 10.0);
        assert_relative_eq!(r.net_annual_change, -25.0);
        assert_relative_eq!(r.cumulative_change, -890.0);
        assert_relative_eq!(r.cumulative_change_co2, -890.0 * 44.0 / 12.0, max_relative = 1e-12);

        assert_eq!(r.equivalent_trees, 1780);
        assert_eq!(r.equivalent_cars, 709);
        assert_eq!(r.equivalent_households, 1305);
    }

    /// The CO2 figure is always exactly 44/12 times the carbon figure.
    #[test]
    fn co2_ratio_holds_for_every_pair() {
        for before in LandUseCategory::ALL {
            for after in LandUseCategory::ALL {
                let r = compute_change(before, after, 3.3, 25);
                assert_relative_eq!(
                    r.cumulative_change_co2,
                    r.cumulative_change * 44.0 / 12.0,
                    max_relative = 1e-12
                );
            }
        }
    }

    /// Zero years degenerates to the immediate release alone.
    #[test]
    fn zero_years_is_immediate_emission_only() {
        let r = compute_change(Forest, Commercial, 1.0, 0);
        assert_relative_eq!(r.cumulative_change, -r.immediate_emission);
    }

    /// Restoration direction: Residential → Forest gains carbon over time.
    #[test]
    fn restoration_is_net_positive() {
        let r = compute_change(Residential, Forest, 2.0, 30);
        assert_eq!(r.immediate_emission, 0.0);
        assert!(r.net_annual_change > 0.0);
        assert!(r.cumulative_change > 0.0);
        assert!(r.cumulative_change_co2 > r.cumulative_change);
    }

    /// Before/after statuses are carried through unmodified.
    #[test]
    fn statuses_match_direct_computation() {
        let r = compute_change(Wetland, Industrial, 4.0, 20);
        assert_eq!(r.before_status, compute_status(Wetland, 4.0));
        assert_eq!(r.after_status, compute_status(Industrial, 4.0));
    }
}
