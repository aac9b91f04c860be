use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use fleet_core::{
    data::vehicle::VehicleStatus,
    views::fleet_overview::{FleetFilter, fleet_overview},
};

use crate::{inputs::Inputs, parsers::format_optional};

#[derive(Args)]
pub struct FleetArgs {
    /// Vehicle types to keep, repeatable
    #[arg(long = "type")]
    vehicle_types: Vec<String>,

    /// Statuses to keep, repeatable
    #[arg(long = "status")]
    statuses: Vec<String>,

    /// Minimum fuel efficiency (km/L)
    #[arg(long)]
    min_efficiency: Option<f64>,
}

pub fn run(inputs: &Inputs, args: FleetArgs) -> Result<(), anyhow::Error> {
    let dataset = inputs.dataset();
    let filter = FleetFilter {
        vehicle_types: args.vehicle_types,
        statuses: args
            .statuses
            .iter()
            .map(|status| VehicleStatus::from(status.as_str()))
            .collect(),
        min_fuel_efficiency: args.min_efficiency,
    };

    let overview = fleet_overview(&dataset.vehicles, &filter);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Vehicle",
        "Type",
        "Status",
        "Capacity (kg)",
        "km/L",
        "CO2 kg/km",
        "Age",
        "Location",
    ]);
    for vehicle in &overview.vehicles {
        table.add_row(vec![
            vehicle.vehicle_id.clone(),
            vehicle.vehicle_type.clone(),
            vehicle.status.to_string(),
            format!("{:.0}", vehicle.capacity_kg),
            format!("{:.1}", vehicle.fuel_efficiency_km_per_l),
            format!("{:.2}", vehicle.co2_emissions_kg_per_km),
            format!("{:.0}", vehicle.age_years),
            vehicle.current_location.clone(),
        ]);
    }

    println!(
        "Fleet size {} | available {} | average age {} years",
        overview.stats.fleet_size,
        overview.stats.available,
        format_optional(overview.stats.average_age_years, "")
    );
    println!("{table}");

    Ok(())
}
