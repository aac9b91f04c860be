use crate::{
    artifacts::model_artifacts::ModelArtifacts,
    data::order::Order,
    matching::{feature_ranges::FeatureRanges, matching_params::MatchingParams},
};

/// Everything needed to evaluate one order against the fleet.
pub struct MatchContext<'a> {
    pub order: &'a Order,
    pub required_kg: f64,
    pub params: &'a MatchingParams,
    pub artifacts: Option<&'a ModelArtifacts>,
    pub ranges: FeatureRanges,
}

impl<'a> MatchContext<'a> {
    pub fn new(
        order: &'a Order,
        params: &'a MatchingParams,
        artifacts: Option<&'a ModelArtifacts>,
        ranges: FeatureRanges,
    ) -> Self {
        MatchContext {
            order,
            required_kg: params.required_capacity_kg(order.order_value_inr),
            params,
            artifacts,
            ranges,
        }
    }
}
