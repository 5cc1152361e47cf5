//! Run one land-use conversion scenario from the command line and print
//! the simulation result, either as a human-readable report or as the
//! same JSON payload the browser UI consumes.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use carbon_core::{
    compare_scenarios, compute_change, yearly_series, CarbonChangeResult, LandUseCategory,
    ScenarioComparison, YearlyCarbon,
};

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Simulate the carbon effect of a land-use conversion")]
struct Args {
    /// Current land-use category (name or letter code, e.g. "forest" or "F").
    #[arg(short, long)]
    before: String,

    /// Target land-use category.
    #[arg(short, long)]
    after: String,

    /// Area in hectares.
    #[arg(long, default_value_t = 1.0)]
    area_ha: f64,

    /// Time horizon in years.
    #[arg(short, long, default_value_t = 30)]
    years: u32,

    /// Emit the full report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    result: CarbonChangeResult,
    timeline: Vec<YearlyCarbon>,
    comparison: Vec<ScenarioComparison>,
}

fn parse_category(s: &str) -> Result<LandUseCategory> {
    s.parse::<LandUseCategory>()
        .with_context(|| format!("valid categories: Forest, Grassland, Agricultural, Wetland, Residential, Commercial, Industrial (got `{s}`)"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let before = parse_category(&args.before)?;
    let after = parse_category(&args.after)?;

    let result = compute_change(before, after, args.area_ha, args.years);
    let timeline = yearly_series(&result, args.years);
    let comparison = compare_scenarios(args.area_ha, before);

    if args.json {
        let report = Report { result, timeline, comparison };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{before} -> {after}, {} ha over {} years",
        args.area_ha, args.years
    );
    println!("  immediate release:    {:>10.1} tC", result.immediate_emission);
    println!("  net annual change:    {:>10.1} tC/yr", result.net_annual_change);
    println!("  cumulative change:    {:>10.1} tC", result.cumulative_change);
    println!("  cumulative change:    {:>10.1} tCO2", result.cumulative_change_co2);
    println!(
        "  equivalent to {} pines / {} car-years / {} household-years",
        result.equivalent_trees, result.equivalent_cars, result.equivalent_households
    );

    println!("\n  before: {:>8.1} tC stored, {:>+7.1} tC/yr net", result.before_status.total_storage, result.before_status.net_balance);
    println!("  after:  {:>8.1} tC stored, {:>+7.1} tC/yr net", result.after_status.total_storage, result.after_status.net_balance);

    Ok(())
}
