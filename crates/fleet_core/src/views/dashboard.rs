use serde::Serialize;

use crate::{
    data::{dataset::Dataset, inventory::InventoryItem},
    utils::stats::{mean, percentage},
    views::chart::{BarChart, ChartSpec, LabeledValue, PieChart},
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardKpis {
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub total_orders: usize,
    /// Percentage of historical deliveries that arrived no later than promised.
    pub on_time_rate: Option<f64>,
    pub average_delivery_cost: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub kpis: DashboardKpis,
    pub charts: Vec<ChartSpec>,
    pub reorder_alerts: Vec<InventoryItem>,
}

pub fn dashboard_kpis(dataset: &Dataset) -> DashboardKpis {
    let on_time = dataset
        .delivery_performance
        .iter()
        .filter(|delivery| delivery.is_on_time())
        .count();

    DashboardKpis {
        total_vehicles: dataset.vehicles.len(),
        available_vehicles: dataset.available_vehicles().count(),
        total_orders: dataset.orders.len(),
        on_time_rate: percentage(on_time, dataset.delivery_performance.len()),
        average_delivery_cost: mean(dataset.cost_breakdown.totals()),
    }
}

pub fn dashboard_view(dataset: &Dataset) -> DashboardView {
    let charts = vec![
        ChartSpec::Pie(PieChart {
            title: String::from("Vehicle Status Distribution"),
            slices: LabeledValue::from_counts(
                dataset.vehicles.iter().map(|vehicle| vehicle.status.as_str()),
            ),
        }),
        ChartSpec::Bar(BarChart {
            title: String::from("Order Priority Distribution"),
            x_label: String::from("Priority"),
            y_label: String::from("Count"),
            bars: LabeledValue::from_counts(
                dataset.orders.iter().map(|order| order.priority.as_str()),
            ),
        }),
        ChartSpec::Bar(BarChart {
            title: String::from("Vehicle Type Distribution"),
            x_label: String::from("Vehicle Type"),
            y_label: String::from("Count"),
            bars: LabeledValue::from_counts(
                dataset.vehicles.iter().map(|vehicle| vehicle.vehicle_type.as_str()),
            ),
        }),
        ChartSpec::Pie(PieChart {
            title: String::from("Delivery Status Distribution"),
            slices: LabeledValue::from_counts(
                dataset
                    .delivery_performance
                    .iter()
                    .map(|delivery| delivery.delivery_status.as_str()),
            ),
        }),
    ];

    DashboardView {
        kpis: dashboard_kpis(dataset),
        charts,
        reorder_alerts: dataset
            .inventory
            .iter()
            .filter(|item| item.needs_reorder())
            .cloned()
            .collect(),
    }
}
