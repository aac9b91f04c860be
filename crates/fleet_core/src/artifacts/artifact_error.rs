use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Model artifacts not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read model artifacts: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid model artifacts: {0}")]
    Deserialize(#[from] serde_json::Error),
}
