use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    data::{
        cost_breakdown::CostBreakdownTable, dataset::Dataset,
        delivery_performance::DeliveryPerformance, feedback::Feedback,
    },
    utils::stats::{mean, percentage},
    views::chart::{
        BarChart, ChartSpec, DEFAULT_HISTOGRAM_BINS, HistogramChart, LabeledValue, PieChart,
        ScatterChart, ScatterPoint, histogram_bins,
    },
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CarrierPerformance {
    pub carrier: String,
    pub deliveries: usize,
    pub average_actual_days: Option<f64>,
    pub average_rating: Option<f64>,
    pub average_cost_inr: Option<f64>,
    pub on_time_rate: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PerformanceView {
    pub carriers: Vec<CarrierPerformance>,
    pub charts: Vec<ChartSpec>,
}

/// Per-carrier means, ordered by carrier name.
pub fn carrier_performance(deliveries: &[DeliveryPerformance]) -> Vec<CarrierPerformance> {
    let mut by_carrier: BTreeMap<&str, Vec<&DeliveryPerformance>> = BTreeMap::new();
    for delivery in deliveries {
        by_carrier
            .entry(delivery.carrier.as_str())
            .or_default()
            .push(delivery);
    }

    by_carrier
        .into_iter()
        .map(|(carrier, deliveries)| CarrierPerformance {
            carrier: carrier.to_owned(),
            deliveries: deliveries.len(),
            average_actual_days: mean(
                deliveries
                    .iter()
                    .map(|delivery| delivery.actual_delivery_days),
            ),
            average_rating: mean(
                deliveries
                    .iter()
                    .filter_map(|delivery| delivery.customer_rating),
            ),
            average_cost_inr: mean(
                deliveries
                    .iter()
                    .filter_map(|delivery| delivery.delivery_cost_inr),
            ),
            on_time_rate: percentage(
                deliveries
                    .iter()
                    .filter(|delivery| delivery.is_on_time())
                    .count(),
                deliveries.len(),
            ),
        })
        .collect()
}

fn delay_histogram(deliveries: &[DeliveryPerformance]) -> ChartSpec {
    ChartSpec::Histogram(HistogramChart {
        title: String::from("Delivery Delay Distribution"),
        x_label: String::from("Delay (days)"),
        bins: histogram_bins(
            deliveries.iter().map(DeliveryPerformance::delay_days),
            DEFAULT_HISTOGRAM_BINS,
        ),
    })
}

fn carrier_scatter(carriers: &[CarrierPerformance]) -> ChartSpec {
    ChartSpec::Scatter(ScatterChart {
        title: String::from("Carrier Performance"),
        x_label: String::from("Average Delivery Days"),
        y_label: String::from("Average Customer Rating"),
        points: carriers
            .iter()
            .filter_map(|carrier| {
                Some(ScatterPoint {
                    label: carrier.carrier.clone(),
                    group: carrier.carrier.clone(),
                    x: carrier.average_actual_days?,
                    y: carrier.average_rating?,
                    size: carrier.average_cost_inr,
                })
            })
            .collect(),
    })
}

fn rating_distribution(feedback: &[Feedback]) -> ChartSpec {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for entry in feedback {
        *counts.entry(entry.rating).or_default() += 1;
    }

    ChartSpec::Bar(BarChart {
        title: String::from("Customer Rating Distribution"),
        x_label: String::from("Rating"),
        y_label: String::from("Count"),
        bars: counts
            .into_iter()
            .map(|(rating, count)| LabeledValue {
                label: rating.to_string(),
                value: count as f64,
            })
            .collect(),
    })
}

fn issue_categories(feedback: &[Feedback]) -> ChartSpec {
    ChartSpec::Pie(PieChart {
        title: String::from("Feedback Issue Categories"),
        slices: LabeledValue::from_counts(
            feedback.iter().map(|entry| entry.issue_category.as_str()),
        ),
    })
}

fn average_cost_components(costs: &CostBreakdownTable) -> ChartSpec {
    ChartSpec::Pie(PieChart {
        title: String::from("Average Cost Breakdown"),
        slices: costs
            .component_names()
            .iter()
            .filter_map(|name| {
                let average = mean(costs.rows().iter().filter_map(|row| row.component(name)))?;
                Some(LabeledValue {
                    label: name.clone(),
                    value: average,
                })
            })
            .collect(),
    })
}

fn total_cost_histogram(costs: &CostBreakdownTable) -> ChartSpec {
    ChartSpec::Histogram(HistogramChart {
        title: String::from("Total Cost Distribution"),
        x_label: String::from("Total Cost (INR)"),
        bins: histogram_bins(costs.totals(), DEFAULT_HISTOGRAM_BINS),
    })
}

pub fn performance_view(dataset: &Dataset) -> PerformanceView {
    let carriers = carrier_performance(&dataset.delivery_performance);

    let mut charts = vec![
        delay_histogram(&dataset.delivery_performance),
        carrier_scatter(&carriers),
    ];

    if !dataset.feedback.is_empty() {
        charts.push(rating_distribution(&dataset.feedback));
        charts.push(issue_categories(&dataset.feedback));
    }

    if !dataset.cost_breakdown.is_empty() {
        charts.push(average_cost_components(&dataset.cost_breakdown));
        charts.push(total_cost_histogram(&dataset.cost_breakdown));
    }

    PerformanceView { carriers, charts }
}
