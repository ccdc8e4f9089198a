//! Batch rescorer configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the sweep does when the oracle fails on one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnAssetError {
    /// Log the failure, leave the record untouched, keep going.
    #[default]
    Skip,
    /// Stop the sweep and discard every staged update.
    Abort,
}

impl fmt::Display for OnAssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::Abort => f.write_str("abort"),
        }
    }
}

impl FromStr for OnAssetError {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(format!("unknown asset error policy '{other}' (expected skip or abort)")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RescoreConfig {
    pub on_asset_error: OnAssetError,
    /// Log a `count/total` line every N records. 0 disables it.
    pub progress_every: usize,
}

impl Default for RescoreConfig {
    fn default() -> Self {
        Self {
            on_asset_error: OnAssetError::default(),
            progress_every: 1000,
        }
    }
}
