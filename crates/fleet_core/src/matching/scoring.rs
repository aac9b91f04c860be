use serde::Serialize;

use crate::{
    data::vehicle::Vehicle,
    matching::{
        city_coordinates::{distance_km, same_location},
        match_context::MatchContext,
        matching_params::ScoreWeights,
    },
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// The order priority gets no boost; every vehicle scores the baseline.
    Baseline,
    Heuristic,
    Artifact,
}

/// Sub-scores of a vehicle, each in [0, 100].
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub proximity: f64,
    pub capacity_fit: f64,
    pub priority_alignment: f64,
    pub priority_source: ScoreSource,
    pub efficiency: f64,
    pub distance_km: Option<f64>,
    pub utilization: f64,
}

impl ScoreBreakdown {
    pub fn total(&self, weights: &ScoreWeights) -> f64 {
        let weights = weights.normalized();
        let total = self.proximity * weights.proximity
            + self.capacity_fit * weights.capacity_fit
            + self.priority_alignment * weights.priority_alignment
            + self.efficiency * weights.efficiency;

        round2(total.clamp(0.0, 100.0))
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn proximity(context: &MatchContext, vehicle: &Vehicle) -> (f64, Option<f64>) {
    if same_location(&vehicle.current_location, &context.order.origin) {
        return (100.0, Some(0.0));
    }

    match distance_km(
        &vehicle.current_location,
        &context.order.origin,
        context.artifacts,
    ) {
        Some(distance) => {
            let scale = context.params.proximity_scale_km.max(f64::EPSILON);
            (100.0 / (1.0 + distance / scale), Some(distance))
        }
        None => (0.0, None),
    }
}

/// Returns the capacity fit score and the utilization it was derived from.
pub fn capacity_fit(context: &MatchContext, vehicle: &Vehicle) -> (f64, f64) {
    let params = context.params;
    if vehicle.capacity_kg <= 0.0 {
        return (0.0, 0.0);
    }

    let utilization = (context.required_kg / vehicle.capacity_kg).clamp(0.0, 1.0);

    let score = if utilization > params.ideal_utilization_max {
        let overflow = (utilization - params.ideal_utilization_max)
            / (1.0 - params.ideal_utilization_max).max(f64::EPSILON);
        100.0 - (100.0 - params.full_utilization_score) * overflow
    } else if utilization >= params.ideal_utilization_min {
        100.0
    } else {
        100.0 * utilization / params.ideal_utilization_min.max(f64::EPSILON)
    };

    (score.clamp(0.0, 100.0), utilization)
}

/// Boost for vehicles suited to high priority orders. Historical compatibility from the model
/// artifacts wins over the preferred type table.
pub fn priority_alignment(context: &MatchContext, vehicle: &Vehicle) -> (f64, ScoreSource) {
    let priority = &context.order.priority;
    let baseline = context.params.baseline_priority_score.clamp(0.0, 100.0);

    if !context.params.is_high_priority(priority) {
        return (baseline, ScoreSource::Baseline);
    }

    if let Some(score) = context
        .artifacts
        .and_then(|artifacts| artifacts.compatibility(priority, &vehicle.vehicle_type))
    {
        return (score, ScoreSource::Artifact);
    }

    if context
        .params
        .is_preferred_type(priority, &vehicle.vehicle_type)
    {
        (
            context.params.preferred_type_score.clamp(0.0, 100.0),
            ScoreSource::Heuristic,
        )
    } else {
        (baseline, ScoreSource::Heuristic)
    }
}

/// Mean of normalized fuel efficiency (higher is better) and CO2 emissions (lower is better).
/// A missing feature value scores as the worst of the fleet.
pub fn efficiency(context: &MatchContext, vehicle: &Vehicle) -> f64 {
    let fuel = match context.ranges.fuel_efficiency {
        _ if !vehicle.fuel_efficiency_km_per_l.is_finite() => 0.0,
        Some(range) => range.position(vehicle.fuel_efficiency_km_per_l),
        None => 1.0,
    };
    let emissions = match context.ranges.co2_emissions {
        _ if !vehicle.co2_emissions_kg_per_km.is_finite() => 0.0,
        Some(range) => 1.0 - range.position(vehicle.co2_emissions_kg_per_km),
        None => 1.0,
    };

    50.0 * (fuel + emissions)
}

pub fn score_vehicle(context: &MatchContext, vehicle: &Vehicle) -> (ScoreBreakdown, Vec<String>) {
    let (proximity, distance_km) = proximity(context, vehicle);
    let (capacity_fit, utilization) = capacity_fit(context, vehicle);
    let (priority_alignment, priority_source) = priority_alignment(context, vehicle);
    let efficiency = efficiency(context, vehicle);

    let mut notes = vec![];
    match distance_km {
        Some(distance) if distance == 0.0 => {
            notes.push(format!("Located at order origin {}", context.order.origin))
        }
        Some(distance) => notes.push(format!(
            "{:.0} km from order origin {}",
            distance, context.order.origin
        )),
        None => notes.push(format!(
            "No coordinates known for {} or {}",
            vehicle.current_location, context.order.origin
        )),
    }

    notes.push(format!(
        "Uses {:.0}% of {:.0} kg capacity",
        utilization * 100.0,
        vehicle.capacity_kg
    ));

    notes.push(match priority_source {
        ScoreSource::Baseline => format!(
            "{} orders get no priority boost",
            context.order.priority
        ),
        ScoreSource::Artifact => format!(
            "Compatibility table rates {} for {} orders at {:.0}",
            vehicle.vehicle_type, context.order.priority, priority_alignment
        ),
        ScoreSource::Heuristic
            if context
                .params
                .is_preferred_type(&context.order.priority, &vehicle.vehicle_type) =>
        {
            format!(
                "{} is preferred for {} orders",
                vehicle.vehicle_type, context.order.priority
            )
        }
        ScoreSource::Heuristic => format!(
            "{} is not preferred for {} orders",
            vehicle.vehicle_type, context.order.priority
        ),
    });

    (
        ScoreBreakdown {
            proximity,
            capacity_fit,
            priority_alignment,
            priority_source,
            efficiency,
            distance_km,
            utilization,
        },
        notes,
    )
}
