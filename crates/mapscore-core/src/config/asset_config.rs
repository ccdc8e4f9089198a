//! Where beatmap assets are looked up.

use serde::{Deserialize, Serialize};

use crate::types::asset::{AssetLocator, DEFAULT_ASSET_DIR, DEFAULT_ASSET_EXTENSION};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    pub dir: String,
    pub extension: String,
}

impl AssetConfig {
    pub fn locator(&self, map_id: i64) -> AssetLocator {
        AssetLocator::under(&self.dir, &self.extension, map_id)
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_ASSET_DIR.to_string(),
            extension: DEFAULT_ASSET_EXTENSION.to_string(),
        }
    }
}
