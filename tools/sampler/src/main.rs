//! Synthetic feature-dump generator for exercising the classifier and
//! aggregator offline, without platform API access.
//!
//! Emits WFS-shaped property bags (biotop_cd / biotop_nm / shape_area in
//! m²) for a queried area of a given primary land use, using the biotop
//! mix proportions observed on the platform, with jittered parcel areas.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use carbon_core::{ha_to_m2, LandUseCategory};

#[derive(Parser, Debug)]
#[command(name = "sampler", about = "Generate synthetic land-cover feature dumps")]
struct Args {
    /// Primary land use of the sampled area (name or letter code).
    #[arg(short, long, default_value = "forest")]
    category: String,

    /// Total sampled area in hectares.
    #[arg(long, default_value_t = 10.0)]
    area_ha: f64,

    /// Parcels to split each biotop type into.
    #[arg(short, long, default_value_t = 3)]
    parcels: usize,

    /// RNG seed for reproducible dumps.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<String>,
}

/// Biotop mix per primary land use: (code, name, percent of total area).
fn mix_for(category: LandUseCategory) -> &'static [(&'static str, &'static str, f64)] {
    match category {
        LandUseCategory::Forest => &[
            ("F1", "상록침엽수림", 45.0),
            ("F2", "낙엽활엽수림", 35.0),
            ("F3", "혼효림", 15.0),
            ("G1", "초지", 5.0),
        ],
        LandUseCategory::Grassland => &[
            ("G1", "자연초지", 60.0),
            ("G2", "조경녹지", 25.0),
            ("F3", "관목림", 15.0),
        ],
        LandUseCategory::Agricultural => &[
            ("A1", "논", 50.0),
            ("A2", "밭", 35.0),
            ("A3", "과수원", 15.0),
        ],
        LandUseCategory::Wetland => &[
            ("W1", "하천습지", 40.0),
            ("W2", "호소습지", 35.0),
            ("W3", "인공습지", 25.0),
        ],
        LandUseCategory::Residential => &[
            ("R1", "단독주택지", 40.0),
            ("R2", "공동주택지", 45.0),
            ("G2", "조경녹지", 15.0),
        ],
        LandUseCategory::Commercial => &[
            ("C1", "상업지역", 70.0),
            ("C2", "업무지역", 20.0),
            ("G2", "조경녹지", 10.0),
        ],
        LandUseCategory::Industrial => &[
            ("I1", "경공업지역", 35.0),
            ("I2", "중공업지역", 55.0),
            ("G2", "조경녹지", 10.0),
        ],
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let category: LandUseCategory = args.category.parse()?;
    let parcels = args.parcels.max(1);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut features = Vec::new();

    for (code, name, percent) in mix_for(category) {
        let type_area_ha = args.area_ha * percent / 100.0;

        // Split the type area into jittered parcels that still sum exactly.
        let weights: Vec<f64> = (0..parcels).map(|_| rng.gen_range(0.5..1.5)).collect();
        let weight_sum: f64 = weights.iter().sum();

        for (i, weight) in weights.iter().enumerate() {
            let parcel_ha = type_area_ha * weight / weight_sum;
            features.push(json!({
                "biotop_cd": format!("{code}-{i}"),
                "biotop_nm": name,
                "shape_area": ha_to_m2(parcel_ha),
            }));
        }
    }

    let dump = serde_json::to_string_pretty(&features)?;
    match &args.output {
        Some(path) => {
            fs::write(path, dump).with_context(|| format!("writing {path}"))?;
            eprintln!(
                "wrote {} features ({} ha, primary {category}) to {path}",
                features.len(),
                args.area_ha
            );
        }
        None => println!("{dump}"),
    }

    Ok(())
}
