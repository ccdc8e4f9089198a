//! Error types for every layer of the recompute job.

pub mod config_error;
pub mod error_code;
pub mod oracle_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use oracle_error::OracleError;
pub use storage_error::StorageError;
