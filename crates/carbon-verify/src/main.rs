//! Invariant battery runner: evaluates every ordered category pair at a
//! reference area and horizon and checks the engine's contract:
//! no-op idempotence, the stock-loss gate, the CO2 mass ratio, status
//! partitioning, and timeline consistency. Exits non-zero on violation.

use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;

use carbon_core::{
    compute_change, compute_status, yearly_series, LandUseCategory,
};

const TOLERANCE: f64 = 1e-9;
const C_TO_CO2: f64 = 44.0 / 12.0;

#[derive(Parser, Debug)]
#[command(name = "carbon-verify", about = "Run the conversion invariant battery over all category pairs")]
struct Args {
    /// Reference area in hectares.
    #[arg(short, long, default_value_t = 1.0)]
    area_ha: f64,

    /// Reference time horizon in years.
    #[arg(short, long, default_value_t = 30)]
    years: u32,

    /// Dump the full pair matrix as JSON instead of the summary table.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PairReport {
    before: LandUseCategory,
    after: LandUseCategory,
    immediate_emission: f64,
    net_annual_change: f64,
    cumulative_change: f64,
    cumulative_change_co2: f64,
    violations: Vec<String>,
}

fn check_pair(
    before: LandUseCategory,
    after: LandUseCategory,
    area_ha: f64,
    years: u32,
) -> PairReport {
    let r = compute_change(before, after, area_ha, years);
    let mut violations = Vec::new();

    // Status partitioning on both endpoints.
    for status in [&r.before_status, &r.after_status] {
        let expected = status.category.coefficients().storage * area_ha;
        if (status.total_storage - expected).abs() > TOLERANCE {
            violations.push(format!(
                "{}: total_storage {} != coefficient × area {expected}",
                status.category, status.total_storage
            ));
        }
        if (status.tree_storage + status.soil_storage - status.total_storage).abs() > TOLERANCE {
            violations.push(format!(
                "{}: tree + soil does not partition total storage",
                status.category
            ));
        }
    }

    // No-op conversions must be exact zeros.
    if before == after
        && (r.immediate_emission != 0.0
            || r.net_annual_change != 0.0
            || r.cumulative_change != 0.0)
    {
        violations.push("no-op conversion produced nonzero change".to_string());
    }

    // Stock-loss gate: a storage gain never releases carbon immediately.
    if after.coefficients().storage >= before.coefficients().storage
        && r.immediate_emission != 0.0
    {
        violations.push(format!(
            "stock gain released {} tC immediately",
            r.immediate_emission
        ));
    }

    // CO2 ratio is exactly 44/12.
    if (r.cumulative_change_co2 - r.cumulative_change * C_TO_CO2).abs() > TOLERANCE {
        violations.push("cumulative CO2 deviates from 44/12 × carbon".to_string());
    }

    // Timeline ends at the cumulative total.
    let series = yearly_series(&r, years);
    match series.last() {
        Some(last) if (last.cumulative - r.cumulative_change).abs() > TOLERANCE => {
            violations.push("timeline does not end at the cumulative change".to_string());
        }
        None => violations.push("timeline is empty".to_string()),
        _ => {}
    }

    PairReport {
        before,
        after,
        immediate_emission: r.immediate_emission,
        net_annual_change: r.net_annual_change,
        cumulative_change: r.cumulative_change,
        cumulative_change_co2: r.cumulative_change_co2,
        violations,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut reports = Vec::with_capacity(49);
    for before in LandUseCategory::ALL {
        for after in LandUseCategory::ALL {
            reports.push(check_pair(before, after, args.area_ha, args.years));
        }
    }

    let failed: usize = reports.iter().filter(|r| !r.violations.is_empty()).count();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!(
            "{:>13} -> {:<13} {:>12} {:>12} {:>12}  status",
            "before", "after", "immediate", "net/yr", "cumulative"
        );
        for report in &reports {
            let status = if report.violations.is_empty() { "ok" } else { "FAIL" };
            println!(
                "{:>13} -> {:<13} {:>12.1} {:>12.1} {:>12.1}  {status}",
                report.before.to_string(),
                report.after.to_string(),
                report.immediate_emission,
                report.net_annual_change,
                report.cumulative_change,
            );
            for violation in &report.violations {
                eprintln!("    {violation}");
            }
        }
        // Spot-check the baseline status table too.
        let status = compute_status(LandUseCategory::Forest, args.area_ha);
        eprintln!(
            "\n{} pairs checked at {} ha / {} yr (forest baseline stock {:.1} tC); {failed} failed",
            reports.len(),
            args.area_ha,
            args.years,
            status.total_storage
        );
    }

    if failed > 0 {
        bail!("{failed} category pair(s) violated engine invariants");
    }
    Ok(())
}
