//! Top-level errors for one rescore run, with their process exit codes.

use mapscore_core::errors::error_code::MapscoreErrorCode;
use mapscore_core::errors::{ConfigError, OracleError, StorageError};

pub const EXIT_STORE_UNAVAILABLE: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_SWEEP_ABORTED: u8 = 3;
pub const EXIT_WRITE_FAILURE: u8 = 4;
/// The commit went through but at least one map kept its previous scores.
pub const EXIT_INCOMPLETE: u8 = 5;

#[derive(Debug, thiserror::Error)]
pub enum RescoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Sweep aborted at map {map_id}: {source}")]
    Oracle {
        map_id: i64,
        #[source]
        source: OracleError,
    },
}

impl RescoreError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_CONFIG,
            Self::Storage(e) if e.is_unavailable() => EXIT_STORE_UNAVAILABLE,
            Self::Storage(_) => EXIT_WRITE_FAILURE,
            Self::Oracle { .. } => EXIT_SWEEP_ABORTED,
        }
    }
}

impl MapscoreErrorCode for RescoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Oracle { source, .. } => source.error_code(),
        }
    }
}
