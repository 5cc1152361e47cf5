//! Land-use taxonomy: the seven canonical categories with their per-hectare
//! carbon coefficients, plus the fixed conversion constants.
//!
//! Coefficients follow the Gyeonggi climate platform reference values.
//! They are process-lifetime constants; lookup is total and O(1).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ── Conversion constants ─────────────────────────────────────────────────────

/// Carbon → CO2 mass ratio (molecular weight 44 over atomic weight 12).
pub const C_TO_CO2: f64 = 44.0 / 12.0;

/// Carbon absorbed by one pine over 30 years (tC). Illustrative reference.
pub const TREE_CARBON_30Y: f64 = 0.5;

/// Annual CO2 emission of one passenger car (tCO2). Illustrative reference.
pub const CAR_ANNUAL_CO2: f64 = 4.6;

/// Annual CO2 emission of one household (tCO2). Illustrative reference.
pub const HOUSEHOLD_ANNUAL_CO2: f64 = 2.5;

/// Fraction of standing stock held in woody biomass; the rest is soil.
pub const TREE_STORAGE_FRACTION: f64 = 0.7;
pub const SOIL_STORAGE_FRACTION: f64 = 0.3;

/// Fraction of lost standing stock released at the moment of conversion.
/// Fixed policy assumption; the remainder is not separately modeled.
pub const IMMEDIATE_RELEASE_FRACTION: f64 = 0.5;

// ── Categories ───────────────────────────────────────────────────────────────

/// The seven canonical land-use categories, in fixed platform order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandUseCategory {
    Forest,
    Grassland,
    Agricultural,
    Wetland,
    Residential,
    Commercial,
    Industrial,
}

/// Per-hectare carbon coefficients and display metadata for one category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CarbonCoefficients {
    /// Standing carbon stock (tC/ha).
    pub storage: f64,
    /// Annual sequestration (tC/ha/yr).
    pub absorption: f64,
    /// Annual release (tC/ha/yr).
    pub emission: f64,
    /// Platform display label.
    pub label: &'static str,
    /// Display color (hex).
    pub color: &'static str,
}

impl LandUseCategory {
    /// All categories in canonical order.
    pub const ALL: [LandUseCategory; 7] = [
        LandUseCategory::Forest,
        LandUseCategory::Grassland,
        LandUseCategory::Agricultural,
        LandUseCategory::Wetland,
        LandUseCategory::Residential,
        LandUseCategory::Commercial,
        LandUseCategory::Industrial,
    ];

    /// Coefficient record for this category. Total for every variant.
    pub const fn coefficients(self) -> &'static CarbonCoefficients {
        match self {
            LandUseCategory::Forest => &CarbonCoefficients {
                storage: 150.0,
                absorption: 8.0,
                emission: 0.0,
                label: "산림지",
                color: "#166534",
            },
            LandUseCategory::Grassland => &CarbonCoefficients {
                storage: 50.0,
                absorption: 3.0,
                emission: 0.0,
                label: "초지/공원녹지",
                color: "#22c55e",
            },
            LandUseCategory::Agricultural => &CarbonCoefficients {
                storage: 30.0,
                absorption: 2.0,
                emission: 1.0,
                label: "농경지",
                color: "#84cc16",
            },
            LandUseCategory::Wetland => &CarbonCoefficients {
                storage: 200.0,
                absorption: 5.0,
                emission: 0.0,
                label: "습지",
                color: "#0ea5e9",
            },
            LandUseCategory::Residential => &CarbonCoefficients {
                storage: 10.0,
                absorption: 0.5,
                emission: 5.0,
                label: "주거지",
                color: "#f97316",
            },
            LandUseCategory::Commercial => &CarbonCoefficients {
                storage: 5.0,
                absorption: 0.2,
                emission: 10.0,
                label: "상업지",
                color: "#ef4444",
            },
            LandUseCategory::Industrial => &CarbonCoefficients {
                storage: 2.0,
                absorption: 0.1,
                emission: 20.0,
                label: "공업지",
                color: "#7c3aed",
            },
        }
    }

    /// Single-letter platform code (F/G/A/W/R/C/I).
    pub const fn code_letter(self) -> char {
        match self {
            LandUseCategory::Forest => 'F',
            LandUseCategory::Grassland => 'G',
            LandUseCategory::Agricultural => 'A',
            LandUseCategory::Wetland => 'W',
            LandUseCategory::Residential => 'R',
            LandUseCategory::Commercial => 'C',
            LandUseCategory::Industrial => 'I',
        }
    }

    /// Stable ASCII name, matching the serde representation.
    pub const fn name(self) -> &'static str {
        match self {
            LandUseCategory::Forest => "Forest",
            LandUseCategory::Grassland => "Grassland",
            LandUseCategory::Agricultural => "Agricultural",
            LandUseCategory::Wetland => "Wetland",
            LandUseCategory::Residential => "Residential",
            LandUseCategory::Commercial => "Commercial",
            LandUseCategory::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for LandUseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a category string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown land-use category `{0}`")]
pub struct ParseCategoryError(pub String);

impl FromStr for LandUseCategory {
    type Err = ParseCategoryError;

    /// Case-insensitive parse of the ASCII category name
    /// (also accepts the single-letter platform code).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "forest" | "f" => Ok(LandUseCategory::Forest),
            "grassland" | "g" => Ok(LandUseCategory::Grassland),
            "agricultural" | "a" => Ok(LandUseCategory::Agricultural),
            "wetland" | "w" => Ok(LandUseCategory::Wetland),
            "residential" | "r" => Ok(LandUseCategory::Residential),
            "commercial" | "c" => Ok(LandUseCategory::Commercial),
            "industrial" | "i" => Ok(LandUseCategory::Industrial),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
