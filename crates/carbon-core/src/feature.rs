//! Canonical land-cover feature record and the boundary adapter that
//! normalizes loosely-keyed WFS property bags into it.
//!
//! Upstream GeoServer layers are inconsistent about attribute names: the
//! type code, type name, and area arrive under several spellings depending
//! on the layer queried. Everything past this module only ever sees the
//! normalized [`RawLandCoverFeature`] shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Square metres per hectare.
const M2_PER_HA: f64 = 10_000.0;

/// Convert an area in m² to hectares.
pub fn m2_to_ha(m2: f64) -> f64 {
    m2 / M2_PER_HA
}

/// Convert an area in hectares to m².
pub fn ha_to_m2(ha: f64) -> f64 {
    ha * M2_PER_HA
}

/// A normalized land-cover feature as received from the feature-fetch
/// collaborator. Read-only input to the engine; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLandCoverFeature {
    /// Biotop type code, possibly empty (e.g. "F1", "G2").
    #[serde(default)]
    pub code: String,
    /// Biotop type name, possibly empty (free text, usually Korean).
    #[serde(default)]
    pub name: String,
    /// Feature area in hectares.
    pub area_ha: f64,
}

/// Error produced while normalizing a property bag into a feature record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// None of the known area attributes is present.
    #[error("feature has no usable area attribute")]
    MissingArea,
    /// An area attribute is present but is neither a number nor a numeric string.
    #[error("area attribute `{0}` is not numeric")]
    NonNumericArea(String),
}

/// Attribute-name variants observed across the platform's WFS layers.
/// Checked in order; first present key wins.
const CODE_KEYS: &[&str] = &["biotop_cd", "btp_cd", "lclsf_cd", "type_cd", "code", "cd"];
const NAME_KEYS: &[&str] = &["biotop_nm", "btp_nm", "lclsf_nm", "type_nm", "name", "nm"];
/// Area attributes carrying hectares.
const AREA_HA_KEYS: &[&str] = &["area_ha", "ar_ha"];
/// Area attributes carrying square metres.
const AREA_M2_KEYS: &[&str] = &["shape_area", "st_area", "area_m2", "area", "ar"];

impl RawLandCoverFeature {
    /// Normalize a GeoJSON-style property bag into a feature record.
    ///
    /// Key lookup is case-insensitive. Missing code/name normalize to empty
    /// strings (the classifier treats those as "no evidence"); a missing or
    /// non-numeric area is an error, since no calculation is meaningful
    /// without it.
    pub fn from_properties(props: &Map<String, Value>) -> Result<Self, FeatureError> {
        let code = first_string(props, CODE_KEYS).unwrap_or_default();
        let name = first_string(props, NAME_KEYS).unwrap_or_default();

        let area_ha = if let Some((key, value)) = first_value(props, AREA_HA_KEYS) {
            as_f64(value).ok_or_else(|| FeatureError::NonNumericArea(key.to_string()))?
        } else if let Some((key, value)) = first_value(props, AREA_M2_KEYS) {
            let m2 =
                as_f64(value).ok_or_else(|| FeatureError::NonNumericArea(key.to_string()))?;
            m2_to_ha(m2)
        } else {
            return Err(FeatureError::MissingArea);
        };

        Ok(Self { code, name, area_ha })
    }

    /// True when the record carries no classification evidence at all.
    /// Such records are skipped by the aggregator rather than classified.
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty() && self.name.trim().is_empty()
    }
}

/// First matching key (case-insensitive), returned with its value.
fn first_value<'a>(
    props: &'a Map<String, Value>,
    keys: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    for key in keys {
        for (k, v) in props {
            if k.eq_ignore_ascii_case(key) && !v.is_null() {
                return Some((key, v));
            }
        }
    }
    None
}

fn first_string(props: &Map<String, Value>, keys: &[&'static str]) -> Option<String> {
    let (_, value) = first_value(props, keys)?;
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric coercion: JSON numbers directly, numeric strings parsed.
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
