pub mod asset_config;
pub mod oracle_config;
pub mod rescore_config;
pub mod store_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use asset_config::AssetConfig;
pub use oracle_config::OracleConfig;
pub use rescore_config::{OnAssetError, RescoreConfig};
pub use store_config::{Durability, StoreConfig};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mapscore.toml";

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MapscoreConfig {
    pub store: StoreConfig,
    pub assets: AssetConfig,
    pub oracle: OracleConfig,
    pub rescore: RescoreConfig,
}

impl MapscoreConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Load config from a file if it exists, defaults otherwise.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
