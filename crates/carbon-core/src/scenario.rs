//! Named conversion scenarios and the all-category comparison table shown
//! alongside a simulation result.

use serde::{Deserialize, Serialize};

use crate::taxonomy::LandUseCategory;

/// A named conversion preset offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub label: &'static str,
    pub target: LandUseCategory,
}

/// The platform's five preset scenarios, in menu order.
pub const SCENARIOS: [Scenario; 5] = [
    Scenario { id: "DEV_RES", label: "주거지 개발", target: LandUseCategory::Residential },
    Scenario { id: "DEV_COM", label: "상업지 개발", target: LandUseCategory::Commercial },
    Scenario { id: "DEV_IND", label: "공업지 개발", target: LandUseCategory::Industrial },
    Scenario { id: "CON_GRN", label: "녹지 보전", target: LandUseCategory::Grassland },
    Scenario { id: "RES_FOR", label: "산림 복원", target: LandUseCategory::Forest },
];

/// One row of the scenario comparison chart: totals for `area_ha` under a
/// candidate target category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub category: LandUseCategory,
    /// Scenario label ("현재 유지" for the row keeping the current use).
    pub label: String,
    /// Standing stock over the area (tC).
    pub storage: f64,
    /// Annual sequestration over the area (tC/yr).
    pub absorption: f64,
    /// Annual release over the area (tC/yr).
    pub emission: f64,
    /// Annual net flux over the area (tC/yr).
    pub net_change: f64,
    /// Display color (hex).
    pub color: String,
}

/// Scenario label used in the comparison chart for each candidate target.
const fn comparison_label(category: LandUseCategory) -> &'static str {
    match category {
        LandUseCategory::Forest => "산림 복원",
        LandUseCategory::Wetland => "습지 조성",
        LandUseCategory::Grassland => "공원녹지",
        LandUseCategory::Agricultural => "농경지",
        LandUseCategory::Residential => "주거지 개발",
        LandUseCategory::Commercial => "상업지 개발",
        LandUseCategory::Industrial => "공업지 개발",
    }
}

/// Comparison row order in the chart (greenest first).
const COMPARISON_ORDER: [LandUseCategory; 7] = [
    LandUseCategory::Forest,
    LandUseCategory::Wetland,
    LandUseCategory::Grassland,
    LandUseCategory::Agricultural,
    LandUseCategory::Residential,
    LandUseCategory::Commercial,
    LandUseCategory::Industrial,
];

/// Build the comparison table for `area_ha`: the current category first
/// (labelled "현재 유지"), then every other category in chart order.
pub fn compare_scenarios(area_ha: f64, current: LandUseCategory) -> Vec<ScenarioComparison> {
    let mut rows = Vec::with_capacity(COMPARISON_ORDER.len());

    rows.push(comparison_row(current, "현재 유지", "#3b82f6", area_ha));
    for category in COMPARISON_ORDER {
        if category != current {
            rows.push(comparison_row(
                category,
                comparison_label(category),
                category.coefficients().color,
                area_ha,
            ));
        }
    }
    rows
}

fn comparison_row(
    category: LandUseCategory,
    label: &str,
    color: &str,
    area_ha: f64,
) -> ScenarioComparison {
    let coef = category.coefficients();
    ScenarioComparison {
        category,
        label: label.to_string(),
        storage: coef.storage * area_ha,
        absorption: coef.absorption * area_ha,
        emission: coef.emission * area_ha,
        net_change: (coef.absorption - coef.emission) * area_ha,
        color: color.to_string(),
    }
}
