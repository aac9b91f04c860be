use std::path::PathBuf;

use fleet_core::{
    artifacts::{artifact_state::ArtifactState, model_artifacts::DEFAULT_ARTIFACTS_FILE},
    data::dataset::Dataset,
    loader::dataset_loader::load_dataset,
};

pub struct Inputs {
    pub data_dir: PathBuf,
    pub artifacts_path: Option<PathBuf>,
}

impl Inputs {
    pub fn dataset(&self) -> Dataset {
        load_dataset(&self.data_dir)
    }

    pub fn artifacts(&self) -> ArtifactState {
        let path = self
            .artifacts_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join(DEFAULT_ARTIFACTS_FILE));

        ArtifactState::load(path)
    }
}
