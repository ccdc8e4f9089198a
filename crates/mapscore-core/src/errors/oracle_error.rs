//! Per-record failures reported by a scoring oracle.

use super::error_code::{self, MapscoreErrorCode};

/// Why the oracle could not score one asset.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OracleError {
    #[error("Asset missing: {path}")]
    AssetMissing { path: String },

    #[error("Asset malformed: {path}: {message}")]
    AssetMalformed { path: String, message: String },

    #[error("Oracle internal error: {message}")]
    Internal { message: String },
}

impl MapscoreErrorCode for OracleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AssetMissing { .. } => error_code::ASSET_MISSING,
            Self::AssetMalformed { .. } => error_code::ASSET_MALFORMED,
            Self::Internal { .. } => error_code::ORACLE_INTERNAL_ERROR,
        }
    }
}
