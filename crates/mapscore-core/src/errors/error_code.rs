//! Stable string codes attached to every error variant.
//! Used in skip reports and log fields so operators can grep for them.

/// Every mapscore error type exposes a stable, machine-readable code.
pub trait MapscoreErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const QUERY_FAILED: &str = "QUERY_FAILED";
pub const WRITE_FAILURE: &str = "WRITE_FAILURE";

pub const ASSET_MISSING: &str = "ASSET_MISSING";
pub const ASSET_MALFORMED: &str = "ASSET_MALFORMED";
pub const ORACLE_INTERNAL_ERROR: &str = "ORACLE_INTERNAL_ERROR";

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
