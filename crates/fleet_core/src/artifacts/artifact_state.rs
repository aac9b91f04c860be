use std::path::Path;

use tracing::{info, warn};

use crate::artifacts::model_artifacts::ModelArtifacts;

/// Outcome of the optional artifact load. Matching degrades to heuristic-only scoring when
/// the artifacts are missing.
#[derive(Debug, Clone)]
pub enum ArtifactState {
    Loaded(ModelArtifacts),
    Missing { reason: String },
}

impl ArtifactState {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match ModelArtifacts::from_file(path) {
            Ok(artifacts) => {
                info!(path = %path.display(), "Model artifacts loaded");
                ArtifactState::Loaded(artifacts)
            }
            Err(error) => {
                warn!("{}. Matching falls back to heuristic scoring.", error);
                ArtifactState::Missing {
                    reason: error.to_string(),
                }
            }
        }
    }

    pub fn artifacts(&self) -> Option<&ModelArtifacts> {
        match self {
            ArtifactState::Loaded(artifacts) => Some(artifacts),
            ArtifactState::Missing { .. } => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ArtifactState::Loaded(_))
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            ArtifactState::Loaded(_) => None,
            ArtifactState::Missing { reason } => Some(reason),
        }
    }
}
