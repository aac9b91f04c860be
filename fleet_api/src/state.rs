use fleet_core::{
    artifacts::artifact_state::ArtifactState, data::dataset::Dataset,
    matching::matching_params::MatchingParams,
};

use crate::sessions::MatchSessions;

pub struct AppState {
    pub dataset: Dataset,
    pub artifacts: ArtifactState,
    pub params: MatchingParams,
    pub sessions: MatchSessions,
}
