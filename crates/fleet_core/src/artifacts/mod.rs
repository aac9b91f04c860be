pub mod artifact_error;
pub mod artifact_state;
pub mod model_artifacts;
