//! Year-by-year projection of a conversion result, for charting.
//!
//! Year 0 carries the one-time conversion release; every later year adds
//! the net annual flux change. Standing stock is interpolated linearly
//! from (initial − immediate release) at year 0 to the after-category
//! stock at the final year.

use serde::{Deserialize, Serialize};

use crate::change::CarbonChangeResult;

/// One row of the projection series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyCarbon {
    pub year: u32,
    /// Cumulative carbon change since conversion (tC).
    pub cumulative: f64,
    /// Carbon change attributed to this year alone (tC).
    pub annual: f64,
    /// Interpolated standing stock (tC).
    pub storage: f64,
}

/// Expand a conversion result into a series of `years + 1` rows
/// (year 0 through the horizon inclusive).
pub fn yearly_series(result: &CarbonChangeResult, years: u32) -> Vec<YearlyCarbon> {
    let initial = result.before_status.total_storage;
    let target = result.after_status.total_storage;
    let start = initial - result.immediate_emission;

    // Stock drifts from the post-release level to the after-category level.
    let per_year = if years == 0 {
        0.0
    } else {
        (target - start) / f64::from(years)
    };

    (0..=years)
        .map(|year| {
            let y = f64::from(year);
            YearlyCarbon {
                year,
                cumulative: result.net_annual_change * y - result.immediate_emission,
                annual: if year == 0 {
                    -result.immediate_emission
                } else {
                    result.net_annual_change
                },
                storage: start + per_year * y,
            }
        })
        .collect()
}
