//! WASM boundary for the browser UI.
//!
//! Exposes the carbon engine to JavaScript: taxonomy dump for the legend,
//! point-in-time status, conversion simulation (result + yearly series +
//! scenario comparison), and feature-set classification. Inputs cross the
//! boundary as JSON strings or plain scalars; results come back as JS
//! values via serde.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use carbon_core::{
    aggregate, compare_scenarios, compute_change, compute_status, yearly_series,
    CarbonChangeResult, LandUseCategory, RawLandCoverFeature, ScenarioComparison, YearlyCarbon,
};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_category(s: &str) -> Result<LandUseCategory, JsValue> {
    s.parse::<LandUseCategory>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// One row of the taxonomy dump consumed by the UI legend.
#[derive(Serialize)]
struct TaxonomyRow {
    category: LandUseCategory,
    label: &'static str,
    color: &'static str,
    storage: f64,
    absorption: f64,
    emission: f64,
}

/// Full payload of one simulation request.
#[derive(Serialize)]
struct SimulationReport {
    result: CarbonChangeResult,
    timeline: Vec<YearlyCarbon>,
    comparison: Vec<ScenarioComparison>,
}

/// Dump the land-use taxonomy (category, label, color, per-ha coefficients).
#[wasm_bindgen]
pub fn taxonomy() -> Result<JsValue, JsValue> {
    let rows: Vec<TaxonomyRow> = LandUseCategory::ALL
        .iter()
        .map(|&category| {
            let coef = category.coefficients();
            TaxonomyRow {
                category,
                label: coef.label,
                color: coef.color,
                storage: coef.storage,
                absorption: coef.absorption,
                emission: coef.emission,
            }
        })
        .collect();
    to_js(&rows)
}

/// Carbon status of `area_ha` hectares under `category`.
#[wasm_bindgen]
pub fn status(category: &str, area_ha: f64) -> Result<JsValue, JsValue> {
    let category = parse_category(category)?;
    to_js(&compute_status(category, area_ha))
}

/// Simulate converting `area_ha` hectares from `before` to `after` over
/// `years` years. Returns the change result, the yearly projection, and
/// the all-category comparison table.
#[wasm_bindgen]
pub fn simulate(
    before: &str,
    after: &str,
    area_ha: f64,
    years: u32,
) -> Result<JsValue, JsValue> {
    let before = parse_category(before)?;
    let after = parse_category(after)?;

    let result = compute_change(before, after, area_ha, years);
    let timeline = yearly_series(&result, years);
    let comparison = compare_scenarios(area_ha, before);

    to_js(&SimulationReport { result, timeline, comparison })
}

/// Classify an already-fetched feature dump and rank land-use shares over
/// a queried area of `total_area_ha`. Accepts a GeoJSON FeatureCollection
/// or a bare array of property bags. Returns `null` when the dump holds
/// no classifiable records.
#[wasm_bindgen]
pub fn classify_features(features_json: &str, total_area_ha: f64) -> Result<JsValue, JsValue> {
    let features = parse_feature_dump(features_json)
        .map_err(|e| JsValue::from_str(&e))?;

    match aggregate(&features, total_area_ha) {
        Some(analysis) => to_js(&analysis),
        None => Ok(JsValue::NULL),
    }
}

/// Parse a feature dump into normalized records.
///
/// Records that fail normalization (no usable area attribute) are dropped
/// rather than failing the whole dump; only malformed JSON is an error.
fn parse_feature_dump(json: &str) -> Result<Vec<RawLandCoverFeature>, String> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| format!("invalid feature JSON: {e}"))?;

    let items = match &value {
        serde_json::Value::Object(map) => match map.get("features") {
            Some(serde_json::Value::Array(items)) => items.as_slice(),
            _ => return Err("expected a FeatureCollection or an array".to_string()),
        },
        serde_json::Value::Array(items) => items.as_slice(),
        _ => return Err("expected a FeatureCollection or an array".to_string()),
    };

    let features = items
        .iter()
        .filter_map(|item| {
            // GeoJSON features nest attributes under "properties"; bare
            // dumps are the property bag itself.
            let props = match item.get("properties") {
                Some(serde_json::Value::Object(props)) => props,
                _ => item.as_object()?,
            };
            RawLandCoverFeature::from_properties(props).ok()
        })
        .collect();

    Ok(features)
}
