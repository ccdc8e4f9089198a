//! Storage-layer errors for SQLite operations.

use super::error_code::{self, MapscoreErrorCode};

/// Errors that can occur in the record store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Record store unavailable at {path}: {message}")]
    StoreUnavailable { path: String, message: String },

    #[error("Record store schema mismatch: {message}")]
    SchemaMismatch { message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Write failed: {message}")]
    WriteFailure { message: String },
}

impl StorageError {
    /// True for the failures that happen before any work is done:
    /// the store could not be opened, is not shaped right, or the id list
    /// could not be read.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable { .. } | Self::SchemaMismatch { .. } | Self::QueryFailed { .. }
        )
    }
}

impl MapscoreErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::StoreUnavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::SchemaMismatch { .. } => error_code::SCHEMA_MISMATCH,
            Self::QueryFailed { .. } => error_code::QUERY_FAILED,
            Self::WriteFailure { .. } => error_code::WRITE_FAILURE,
        }
    }
}
