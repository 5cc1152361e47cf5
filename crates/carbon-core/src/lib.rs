//! Carbon accounting engine for land-use conversion simulation.
//!
//! Pure, synchronous functions over a fixed seven-category land-use
//! taxonomy: classify raw land-cover features, compute the point-in-time
//! carbon status of an area, and project the carbon effect of converting
//! an area from one category to another over a time horizon.
//!
//! The engine performs no I/O and holds no mutable state; callers supply
//! already-fetched feature records and consume fresh result values.

pub mod aggregate;
pub mod change;
pub mod classify;
pub mod feature;
pub mod scenario;
pub mod status;
pub mod taxonomy;
pub mod timeline;

pub use aggregate::{aggregate, BiotopAnalysis, CategoryShare};
pub use change::{compute_change, CarbonChangeResult};
pub use classify::{classify, classify_feature};
pub use feature::{ha_to_m2, m2_to_ha, FeatureError, RawLandCoverFeature};
pub use scenario::{compare_scenarios, Scenario, ScenarioComparison, SCENARIOS};
pub use status::{compute_status, CarbonStatus};
pub use taxonomy::{CarbonCoefficients, LandUseCategory};
pub use timeline::{yearly_series, YearlyCarbon};
