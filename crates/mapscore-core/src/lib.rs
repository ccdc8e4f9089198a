//! # mapscore-core
//!
//! Foundation crate for the map score recompute job.
//! Defines the shared types, the scoring oracle trait, errors, config and
//! tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::MapscoreConfig;
pub use errors::error_code::MapscoreErrorCode;
pub use traits::oracle::IScoringOracle;
pub use traits::store::{IMapScoreStore, WriteStats};
pub use types::asset::AssetLocator;
pub use types::mods::ModifierSet;
pub use types::scoring::{ScoringRequest, ScoringResult};
