use jiff::Timestamp;
use tracing::{debug, instrument};

use crate::{
    artifacts::artifact_state::ArtifactState,
    data::dataset::Dataset,
    matching::{
        feature_ranges::FeatureRanges,
        hard_constraint::HardConstraint,
        match_context::MatchContext,
        matching_params::MatchingParams,
        scoring::score_vehicle,
        vehicle_match::{MatchOutcome, VehicleMatch},
    },
};

pub const MIN_SCORE_BOUNDS: (f64, f64) = (0.0, 100.0);

pub fn clamp_min_score(min_score: f64) -> f64 {
    if min_score.is_nan() {
        return MIN_SCORE_BOUNDS.0;
    }

    min_score.clamp(MIN_SCORE_BOUNDS.0, MIN_SCORE_BOUNDS.1)
}

pub struct Matcher<'a> {
    dataset: &'a Dataset,
    artifacts: &'a ArtifactState,
    params: &'a MatchingParams,
    ranges: FeatureRanges,
}

impl<'a> Matcher<'a> {
    pub fn new(
        dataset: &'a Dataset,
        artifacts: &'a ArtifactState,
        params: &'a MatchingParams,
    ) -> Self {
        Matcher {
            dataset,
            artifacts,
            params,
            ranges: FeatureRanges::from_fleet(&dataset.vehicles),
        }
    }

    /// Ranks the vehicles able to carry `order_id`, best first. Ties are broken by vehicle id.
    #[instrument(skip(self), level = "debug")]
    pub fn find_vehicle_matches(&self, order_id: &str, min_score: f64) -> MatchOutcome {
        let min_score = clamp_min_score(min_score);
        let mut notices = vec![];

        if let Some(reason) = self.artifacts.warning() {
            notices.push(format!(
                "Model artifacts unavailable ({reason}), using heuristic scoring only"
            ));
        }

        let mut outcome = MatchOutcome {
            order_id: order_id.to_owned(),
            min_score,
            heuristic_only: !self.artifacts.is_loaded(),
            notices: vec![],
            matches: vec![],
            computed_at: Timestamp::now(),
        };

        let Some(order) = self.dataset.order(order_id) else {
            notices.push(format!("Order {order_id} not found"));
            outcome.notices = notices;
            return outcome;
        };

        let context = MatchContext::new(
            order,
            self.params,
            self.artifacts.artifacts(),
            self.ranges,
        );

        let mut matches: Vec<VehicleMatch> = self
            .dataset
            .vehicles
            .iter()
            .filter(|vehicle| match HardConstraint::first_violation(&context, vehicle) {
                Some(constraint) => {
                    debug!(
                        vehicle_id = %vehicle.vehicle_id,
                        constraint = constraint.constraint_name(),
                        "Vehicle excluded"
                    );
                    false
                }
                None => true,
            })
            .map(|vehicle| {
                let (breakdown, notes) = score_vehicle(&context, vehicle);
                VehicleMatch {
                    vehicle: vehicle.clone(),
                    score: breakdown.total(&self.params.weights),
                    breakdown,
                    notes,
                }
            })
            .filter(|vehicle_match| vehicle_match.score >= min_score)
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.vehicle.vehicle_id.cmp(&b.vehicle.vehicle_id))
        });

        if matches.is_empty() {
            notices.push(String::from(
                "No suitable vehicles found with the current constraints. Try lowering the minimum score.",
            ));
        }

        debug!(
            order_id,
            matches = matches.len(),
            required_kg = context.required_kg,
            "Matching done"
        );

        outcome.notices = notices;
        outcome.matches = matches;
        outcome
    }
}
