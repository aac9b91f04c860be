use std::{num::ParseIntError, path::PathBuf};

use fleet_core::artifacts::model_artifacts::DEFAULT_ARTIFACTS_FILE;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid FLEET_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub artifacts_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = PathBuf::from(lookup("FLEET_DATA_DIR").unwrap_or_else(|| String::from(".")));
        let artifacts_path = lookup("FLEET_ARTIFACTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DEFAULT_ARTIFACTS_FILE));

        let port = match lookup("FLEET_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(ServerConfig {
            data_dir,
            artifacts_path,
            host: lookup("FLEET_HOST").unwrap_or_else(|| String::from(DEFAULT_HOST)),
            port,
        })
    }
}
