//! Record store configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Durability trade-off applied to the store for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Durability {
    /// No fsync, in-memory journal and temp store, exclusive lock.
    /// A crash mid-run may corrupt the store; re-run from scratch.
    #[default]
    Relaxed,
    /// Full fsync with an on-disk rollback journal.
    Safe,
}

impl fmt::Display for Durability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relaxed => f.write_str("relaxed"),
            Self::Safe => f.write_str("safe"),
        }
    }
}

impl FromStr for Durability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "safe" => Ok(Self::Safe),
            other => Err(format!("unknown durability '{other}' (expected relaxed or safe)")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite database holding the `map` table.
    pub path: String,
    pub durability: Durability,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "maps.db".to_string(),
            durability: Durability::default(),
        }
    }
}
