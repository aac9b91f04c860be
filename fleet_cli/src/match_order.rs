use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use fleet_core::matching::{matcher::Matcher, matching_params::MatchingParams};
use tracing::{info, warn};

use crate::{inputs::Inputs, parsers};

#[derive(Args)]
pub struct MatchArgs {
    /// Order to match
    #[arg(short, long)]
    order: String,

    /// Minimum total score, clamped to [0, 100]
    #[arg(short, long, value_parser = parsers::parse_min_score)]
    min_score: Option<f64>,

    /// Print the outcome as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(inputs: &Inputs, args: MatchArgs) -> Result<(), anyhow::Error> {
    let dataset = inputs.dataset();
    let artifacts = inputs.artifacts();
    let params = MatchingParams::default();

    let outcome = Matcher::new(&dataset, &artifacts, &params).find_vehicle_matches(
        &args.order,
        args.min_score.unwrap_or(params.default_min_score),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    for notice in &outcome.notices {
        warn!("{}", notice);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Vehicle",
        "Type",
        "Location",
        "Capacity (kg)",
        "Score",
        "Proximity",
        "Capacity Fit",
        "Priority",
        "Efficiency",
    ]);

    for vehicle_match in &outcome.matches {
        let breakdown = &vehicle_match.breakdown;
        table.add_row(vec![
            vehicle_match.vehicle.vehicle_id.clone(),
            vehicle_match.vehicle.vehicle_type.clone(),
            vehicle_match.vehicle.current_location.clone(),
            format!("{:.0}", vehicle_match.vehicle.capacity_kg),
            format!("{:.2}", vehicle_match.score),
            format!("{:.1}", breakdown.proximity),
            format!("{:.1}", breakdown.capacity_fit),
            format!("{:.1}", breakdown.priority_alignment),
            format!("{:.1}", breakdown.efficiency),
        ]);
    }

    info!(
        "{} vehicle(s) for order {} at minimum score {:.0}",
        outcome.len(),
        outcome.order_id,
        outcome.min_score
    );
    println!("{table}");

    if let Some(best) = outcome.best_match() {
        println!(
            "Best match: {} ({}) with score {:.2}",
            best.vehicle.vehicle_id, best.vehicle.vehicle_type, best.score
        );
        for note in &best.notes {
            println!("  - {note}");
        }
    }

    Ok(())
}
