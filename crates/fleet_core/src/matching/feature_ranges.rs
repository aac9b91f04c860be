use serde::Serialize;

use crate::data::vehicle::Vehicle;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    fn from_values(values: impl Iterator<Item = f64>) -> Option<Range> {
        values
            .filter(|value| value.is_finite())
            .fold(None, |range: Option<Range>, value| match range {
                None => Some(Range {
                    min: value,
                    max: value,
                }),
                Some(range) => Some(Range {
                    min: range.min.min(value),
                    max: range.max.max(value),
                }),
            })
    }

    /// Position of `value` inside the range, in [0, 1]. A zero-width range maps to 1.
    pub fn position(&self, value: f64) -> f64 {
        let width = self.max - self.min;
        if width <= f64::EPSILON {
            return 1.0;
        }

        ((value - self.min) / width).clamp(0.0, 1.0)
    }
}

/// Fleet-wide bounds used to normalize efficiency features.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRanges {
    pub fuel_efficiency: Option<Range>,
    pub co2_emissions: Option<Range>,
}

impl FeatureRanges {
    pub fn from_fleet(vehicles: &[Vehicle]) -> Self {
        FeatureRanges {
            fuel_efficiency: Range::from_values(
                vehicles.iter().map(|vehicle| vehicle.fuel_efficiency_km_per_l),
            ),
            co2_emissions: Range::from_values(
                vehicles.iter().map(|vehicle| vehicle.co2_emissions_kg_per_km),
            ),
        }
    }
}
