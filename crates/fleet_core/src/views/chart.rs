use serde::Serialize;

use crate::utils::stats::{quantile, sorted_finite, value_counts};

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn from_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabeledValue> {
        value_counts(labels)
            .into_iter()
            .map(|(label, count)| LabeledValue {
                label,
                value: count as f64,
            })
            .collect()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<LabeledValue>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<LabeledValue>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HistogramChart {
    pub title: String,
    pub x_label: String,
    pub bins: Vec<HistogramBin>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub label: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxGroup {
    pub fn from_values(label: String, values: impl Iterator<Item = f64>) -> Option<BoxGroup> {
        let sorted = sorted_finite(values);

        Some(BoxGroup {
            count: sorted.len(),
            min: quantile(&sorted, 0.0)?,
            q1: quantile(&sorted, 0.25)?,
            median: quantile(&sorted, 0.5)?,
            q3: quantile(&sorted, 0.75)?,
            max: quantile(&sorted, 1.0)?,
            label,
        })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BoxChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub groups: Vec<BoxGroup>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub label: String,
    pub group: String,
    pub x: f64,
    pub y: f64,
    pub size: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

/// Renderer-agnostic chart description.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Bar(BarChart),
    Histogram(HistogramChart),
    Box(BoxChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(chart) => &chart.title,
            ChartSpec::Bar(chart) => &chart.title,
            ChartSpec::Histogram(chart) => &chart.title,
            ChartSpec::Box(chart) => &chart.title,
            ChartSpec::Scatter(chart) => &chart.title,
        }
    }
}

/// Splits the value range into `bins` equal-width buckets. The last bucket is closed.
pub fn histogram_bins(values: impl Iterator<Item = f64>, bins: usize) -> Vec<HistogramBin> {
    let sorted = sorted_finite(values);
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return vec![];
    };

    let width = (max - min) / bins.max(1) as f64;
    if width <= 0.0 {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: sorted.len(),
        }];
    }

    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|index| HistogramBin {
            start: min + width * index as f64,
            end: if index + 1 == bins {
                max
            } else {
                min + width * (index + 1) as f64
            },
            count: 0,
        })
        .collect();

    for value in sorted {
        let index = (((value - min) / width).floor() as usize).min(bins - 1);
        histogram[index].count += 1;
    }

    histogram
}
