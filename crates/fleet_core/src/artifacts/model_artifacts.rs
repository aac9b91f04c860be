use std::{fs::File, io::BufReader, path::Path};

use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{artifacts::artifact_error::ArtifactError, data::order::Priority};

pub const DEFAULT_ARTIFACTS_FILE: &str = "fleet_model_artifacts.json";

/// Precomputed lookup tables produced offline from historical deliveries.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields, rename = "ModelArtifacts")]
pub struct ModelArtifacts {
    /// Priority -> vehicle type -> compatibility score in [0, 100].
    #[serde(default)]
    pub compatibility: FxHashMap<String, FxHashMap<String, f64>>,

    /// City -> [latitude, longitude].
    #[serde(default)]
    pub location_coordinates: FxHashMap<String, [f64; 2]>,
}

impl ModelArtifacts {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let artifacts: ModelArtifacts = serde_json::from_reader(BufReader::new(file))?;

        Ok(artifacts)
    }

    pub fn compatibility(&self, priority: &Priority, vehicle_type: &str) -> Option<f64> {
        self.compatibility
            .get(priority.as_str())
            .and_then(|by_type| by_type.get(vehicle_type))
            .filter(|score| score.is_finite())
            .map(|score| score.clamp(0.0, 100.0))
    }

    pub fn coordinates(&self, location: &str) -> Option<[f64; 2]> {
        self.location_coordinates.get(location).copied().or_else(|| {
            self.location_coordinates
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(location))
                .map(|(_, coordinates)| *coordinates)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_is_clamped() {
        let artifacts: ModelArtifacts = serde_json::from_str(
            r#"{ "compatibility": { "Express": { "Small_Van": 140, "Large_Truck": -5 } } }"#,
        )
        .unwrap();

        assert_eq!(
            artifacts.compatibility(&Priority::Express, "Small_Van"),
            Some(100.0)
        );
        assert_eq!(
            artifacts.compatibility(&Priority::Express, "Large_Truck"),
            Some(0.0)
        );
        assert_eq!(artifacts.compatibility(&Priority::Economy, "Small_Van"), None);
    }

    #[test]
    fn test_coordinates_case_insensitive() {
        let artifacts: ModelArtifacts = serde_json::from_str(
            r#"{ "location_coordinates": { "Mumbai": [19.07, 72.87] } }"#,
        )
        .unwrap();

        assert_eq!(artifacts.coordinates("Mumbai"), Some([19.07, 72.87]));
        assert_eq!(artifacts.coordinates("mumbai"), Some([19.07, 72.87]));
        assert_eq!(artifacts.coordinates("Delhi"), None);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<ModelArtifacts>(r#"{ "weights": [1, 2] }"#);
        assert!(result.is_err());
    }
}
