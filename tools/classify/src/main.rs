//! Classify a saved WFS feature dump and print the land-use breakdown of
//! the queried area: dominant category first, then the ranked shares.
//!
//! Accepts a GeoJSON FeatureCollection or a bare JSON array of property
//! bags; attribute names are normalized by the engine's boundary adapter.

use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;

use carbon_core::{aggregate, RawLandCoverFeature};

#[derive(Parser, Debug)]
#[command(name = "classify", about = "Classify a land-cover feature dump and rank land-use shares")]
struct Args {
    /// Path to the feature dump (GeoJSON FeatureCollection or array).
    #[arg(short, long)]
    input: String,

    /// Total queried area in hectares. Defaults to the summed feature area.
    #[arg(short, long)]
    total_area_ha: Option<f64>,

    /// Emit the analysis as JSON.
    #[arg(long)]
    json: bool,
}

/// Pull normalized records out of the dump, counting the ones dropped for
/// lacking a usable area attribute.
fn load_features(value: &Value) -> Result<(Vec<RawLandCoverFeature>, usize)> {
    let items = match value {
        Value::Object(map) => match map.get("features") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => bail!("expected a FeatureCollection with a `features` array"),
        },
        Value::Array(items) => items.as_slice(),
        _ => bail!("expected a FeatureCollection or an array of property bags"),
    };

    let mut features = Vec::with_capacity(items.len());
    let mut dropped = 0usize;
    for item in items {
        let props = match item.get("properties").and_then(Value::as_object) {
            Some(props) => props,
            None => match item.as_object() {
                Some(props) => props,
                None => {
                    dropped += 1;
                    continue;
                }
            },
        };
        match RawLandCoverFeature::from_properties(props) {
            Ok(feature) => features.push(feature),
            Err(_) => dropped += 1,
        }
    }
    Ok((features, dropped))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.input))?;

    let (features, dropped) = load_features(&value)?;
    if dropped > 0 {
        eprintln!("dropped {dropped} record(s) without a usable area attribute");
    }

    let total_area_ha = args
        .total_area_ha
        .unwrap_or_else(|| features.iter().map(|f| f.area_ha).sum());

    let Some(analysis) = aggregate(&features, total_area_ha) else {
        bail!("no classifiable features in {}", args.input);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!(
        "dominant: {} ({}): {:.2} ha, {:.1}% of {:.2} ha",
        analysis.dominant.category,
        analysis.dominant.label,
        analysis.dominant.area_ha,
        analysis.dominant.ratio_percent,
        total_area_ha
    );
    println!("\n{:<13} {:>10} {:>8}  label", "category", "area (ha)", "share");
    for share in &analysis.breakdown {
        println!(
            "{:<13} {:>10.2} {:>7.1}%  {}",
            share.category.to_string(),
            share.area_ha,
            share.ratio_percent,
            share.label
        );
    }

    Ok(())
}
