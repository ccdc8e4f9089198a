//! `IScoringOracle` — the capability that turns an asset into scores.
//!
//! The scoring engine itself is external. Adapters wrap it behind this
//! trait so the rescorer never depends on its internals.

use crate::errors::OracleError;
use crate::types::scoring::{ScoringRequest, ScoringResult};

/// Computes the four score components for one asset.
///
/// Each call owns whatever working state the engine needs and must release
/// it before returning. Nothing may carry over between calls: a sweep makes
/// tens of thousands of them in one process.
pub trait IScoringOracle {
    fn compute_score(&self, request: &ScoringRequest) -> Result<ScoringResult, OracleError>;
}

impl<T: IScoringOracle + ?Sized> IScoringOracle for &T {
    fn compute_score(&self, request: &ScoringRequest) -> Result<ScoringResult, OracleError> {
        (**self).compute_score(request)
    }
}

impl<T: IScoringOracle + ?Sized> IScoringOracle for Box<T> {
    fn compute_score(&self, request: &ScoringRequest) -> Result<ScoringResult, OracleError> {
        (**self).compute_score(request)
    }
}
