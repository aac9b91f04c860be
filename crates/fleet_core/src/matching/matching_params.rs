use fxhash::FxHashMap;

use crate::data::order::{Priority, SpecialHandling};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreWeights {
    pub proximity: f64,
    pub capacity_fit: f64,
    pub priority_alignment: f64,
    pub efficiency: f64,
}

impl ScoreWeights {
    /// Rescales the weights so they sum to 1. Degenerate weights fall back to the defaults.
    pub fn normalized(&self) -> ScoreWeights {
        let weights = [
            self.proximity,
            self.capacity_fit,
            self.priority_alignment,
            self.efficiency,
        ];

        if weights.iter().any(|weight| !weight.is_finite() || *weight < 0.0) {
            return ScoreWeights::default().normalized();
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return ScoreWeights::default().normalized();
        }

        ScoreWeights {
            proximity: self.proximity / total,
            capacity_fit: self.capacity_fit / total,
            priority_alignment: self.priority_alignment / total,
            efficiency: self.efficiency / total,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            proximity: 0.35,
            capacity_fit: 0.30,
            priority_alignment: 0.20,
            efficiency: 0.15,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MatchingParams {
    pub weights: ScoreWeights,

    /// Order value (INR) carried per kilogram when estimating the required capacity.
    pub value_per_kg: f64,
    pub max_required_kg: f64,

    /// Distance at which the proximity score halves.
    pub proximity_scale_km: f64,

    pub ideal_utilization_min: f64,
    pub ideal_utilization_max: f64,
    /// Capacity fit score when the order fills the vehicle completely.
    pub full_utilization_score: f64,

    /// Priorities whose orders get the priority alignment boost.
    pub high_priorities: Vec<Priority>,
    pub preferred_type_score: f64,
    /// Priority alignment of every vehicle for other priorities, and of non-preferred types.
    pub baseline_priority_score: f64,

    pub handling_support: FxHashMap<SpecialHandling, Vec<String>>,
    pub priority_preferences: FxHashMap<Priority, Vec<String>>,

    pub default_min_score: f64,
}

fn types(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

impl Default for MatchingParams {
    fn default() -> Self {
        let mut handling_support = FxHashMap::default();
        handling_support.insert(
            SpecialHandling::TemperatureControlled,
            types(&["Refrigerated"]),
        );
        handling_support.insert(
            SpecialHandling::Fragile,
            types(&["Small_Van", "Medium_Truck", "Refrigerated"]),
        );
        handling_support.insert(
            SpecialHandling::Hazmat,
            types(&["Medium_Truck", "Large_Truck"]),
        );

        let mut priority_preferences = FxHashMap::default();
        priority_preferences.insert(Priority::Express, types(&["Express_Bike", "Small_Van"]));

        MatchingParams {
            weights: ScoreWeights::default(),
            value_per_kg: 100.0,
            max_required_kg: 1000.0,
            proximity_scale_km: 500.0,
            ideal_utilization_min: 0.5,
            ideal_utilization_max: 0.9,
            full_utilization_score: 70.0,
            high_priorities: vec![Priority::Express],
            preferred_type_score: 100.0,
            baseline_priority_score: 30.0,
            handling_support,
            priority_preferences,
            default_min_score: 70.0,
        }
    }
}

impl MatchingParams {
    pub fn required_capacity_kg(&self, order_value_inr: f64) -> f64 {
        if !order_value_inr.is_finite() || order_value_inr <= 0.0 {
            return 0.0;
        }

        (order_value_inr / self.value_per_kg).min(self.max_required_kg)
    }

    pub fn supports_handling(&self, handling: &SpecialHandling, vehicle_type: &str) -> bool {
        match handling {
            SpecialHandling::None => true,
            handling => self
                .handling_support
                .get(handling)
                .is_some_and(|types| types.iter().any(|t| t == vehicle_type)),
        }
    }

    pub fn is_high_priority(&self, priority: &Priority) -> bool {
        self.high_priorities.contains(priority)
    }

    pub fn is_preferred_type(&self, priority: &Priority, vehicle_type: &str) -> bool {
        self.priority_preferences
            .get(priority)
            .is_some_and(|types| types.iter().any(|t| t == vehicle_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoreWeights::default().normalized();
        let total = weights.proximity
            + weights.capacity_fit
            + weights.priority_alignment
            + weights.efficiency;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_are_rescaled() {
        let weights = ScoreWeights {
            proximity: 2.0,
            capacity_fit: 1.0,
            priority_alignment: 1.0,
            efficiency: 0.0,
        }
        .normalized();

        assert_eq!(weights.proximity, 0.5);
        assert_eq!(weights.capacity_fit, 0.25);
        assert_eq!(weights.efficiency, 0.0);
    }

    #[test]
    fn test_degenerate_weights_fall_back() {
        let weights = ScoreWeights {
            proximity: 0.0,
            capacity_fit: 0.0,
            priority_alignment: 0.0,
            efficiency: 0.0,
        }
        .normalized();

        assert_eq!(weights, ScoreWeights::default().normalized());
    }

    #[test]
    fn test_required_capacity() {
        let params = MatchingParams::default();

        assert_eq!(params.required_capacity_kg(1500.0), 15.0);
        assert_eq!(params.required_capacity_kg(250_000.0), 1000.0);
        assert_eq!(params.required_capacity_kg(-10.0), 0.0);
        assert_eq!(params.required_capacity_kg(f64::NAN), 0.0);
    }

    #[test]
    fn test_only_express_is_high_priority() {
        let params = MatchingParams::default();

        assert!(params.is_high_priority(&Priority::Express));
        assert!(!params.is_high_priority(&Priority::Standard));
        assert!(!params.is_high_priority(&Priority::Economy));
        assert!(!params.is_high_priority(&Priority::Other(String::from("Urgent"))));
    }

    #[test]
    fn test_handling_support() {
        let params = MatchingParams::default();

        assert!(params.supports_handling(&SpecialHandling::None, "Express_Bike"));
        assert!(params.supports_handling(&SpecialHandling::TemperatureControlled, "Refrigerated"));
        assert!(!params.supports_handling(&SpecialHandling::TemperatureControlled, "Small_Van"));
        assert!(params.supports_handling(&SpecialHandling::Hazmat, "Large_Truck"));
        assert!(!params.supports_handling(
            &SpecialHandling::Other(String::from("Oversized")),
            "Large_Truck"
        ));
    }
}
