//! Scoring oracle configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OracleConfig {
    /// Executable invoked once per asset. Resolved through `PATH` when bare.
    pub command: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            command: "oppai".to_string(),
        }
    }
}
