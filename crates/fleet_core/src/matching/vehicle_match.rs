use jiff::Timestamp;
use serde::Serialize;

use crate::{data::vehicle::Vehicle, matching::scoring::ScoreBreakdown};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VehicleMatch {
    pub vehicle: Vehicle,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub notes: Vec<String>,
}

/// Ranked result of one matching request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub order_id: String,
    pub min_score: f64,
    pub heuristic_only: bool,
    pub notices: Vec<String>,
    pub matches: Vec<VehicleMatch>,
    pub computed_at: Timestamp,
}

impl MatchOutcome {
    pub fn best_match(&self) -> Option<&VehicleMatch> {
        self.matches.first()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn vehicle_ids(&self) -> impl Iterator<Item = &str> {
        self.matches
            .iter()
            .map(|vehicle_match| vehicle_match.vehicle.vehicle_id.as_str())
    }
}
