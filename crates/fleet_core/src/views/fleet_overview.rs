use serde::Serialize;

use crate::{
    data::vehicle::{Vehicle, VehicleStatus},
    matching::feature_ranges::{FeatureRanges, Range},
    utils::stats::mean,
    views::chart::{BoxChart, BoxGroup, ChartSpec, ScatterChart, ScatterPoint},
};

/// Fleet table filter. Empty type or status lists select everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetFilter {
    pub vehicle_types: Vec<String>,
    pub statuses: Vec<VehicleStatus>,
    pub min_fuel_efficiency: Option<f64>,
}

impl FleetFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        (self.vehicle_types.is_empty()
            || self
                .vehicle_types
                .iter()
                .any(|vehicle_type| *vehicle_type == vehicle.vehicle_type))
            && (self.statuses.is_empty() || self.statuses.contains(&vehicle.status))
            && self
                .min_fuel_efficiency
                .is_none_or(|min| vehicle.fuel_efficiency_km_per_l >= min)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FleetStats {
    pub fleet_size: usize,
    pub available: usize,
    pub average_age_years: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FleetOverview {
    pub stats: FleetStats,
    pub vehicle_types: Vec<String>,
    pub statuses: Vec<String>,
    pub fuel_efficiency_bounds: Option<Range>,
    pub vehicles: Vec<Vehicle>,
    pub charts: Vec<ChartSpec>,
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = vec![];
    for value in values {
        if !unique.iter().any(|seen| seen == value) {
            unique.push(value.to_owned());
        }
    }
    unique
}

fn efficiency_by_type(vehicles: &[Vehicle], vehicle_types: &[String]) -> ChartSpec {
    ChartSpec::Box(BoxChart {
        title: String::from("Fuel Efficiency by Vehicle Type"),
        x_label: String::from("Vehicle Type"),
        y_label: String::from("Fuel Efficiency (km/L)"),
        groups: vehicle_types
            .iter()
            .filter_map(|vehicle_type| {
                BoxGroup::from_values(
                    vehicle_type.clone(),
                    vehicles
                        .iter()
                        .filter(|vehicle| vehicle.vehicle_type == *vehicle_type)
                        .map(|vehicle| vehicle.fuel_efficiency_km_per_l),
                )
            })
            .collect(),
    })
}

fn emissions_by_age(vehicles: &[Vehicle]) -> ChartSpec {
    ChartSpec::Scatter(ScatterChart {
        title: String::from("CO2 Emissions vs Vehicle Age"),
        x_label: String::from("Age (years)"),
        y_label: String::from("CO2 Emissions (kg/km)"),
        points: vehicles
            .iter()
            .map(|vehicle| ScatterPoint {
                label: vehicle.vehicle_id.clone(),
                group: vehicle.vehicle_type.clone(),
                x: vehicle.age_years,
                y: vehicle.co2_emissions_kg_per_km,
                size: Some(vehicle.capacity_kg),
            })
            .collect(),
    })
}

/// Statistics and charts describe the whole fleet; only the table honours the filter.
pub fn fleet_overview(vehicles: &[Vehicle], filter: &FleetFilter) -> FleetOverview {
    let vehicle_types = unique(vehicles.iter().map(|vehicle| vehicle.vehicle_type.as_str()));
    let statuses = unique(vehicles.iter().map(|vehicle| vehicle.status.as_str()));

    FleetOverview {
        stats: FleetStats {
            fleet_size: vehicles.len(),
            available: vehicles.iter().filter(|vehicle| vehicle.is_available()).count(),
            average_age_years: mean(vehicles.iter().map(|vehicle| vehicle.age_years)),
        },
        fuel_efficiency_bounds: FeatureRanges::from_fleet(vehicles).fuel_efficiency,
        vehicles: vehicles
            .iter()
            .filter(|vehicle| filter.matches(vehicle))
            .cloned()
            .collect(),
        charts: vec![
            efficiency_by_type(vehicles, &vehicle_types),
            emissions_by_age(vehicles),
        ],
        vehicle_types,
        statuses,
    }
}
