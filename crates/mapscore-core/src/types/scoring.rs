//! Oracle inputs and outputs.

use super::asset::AssetLocator;
use super::mods::ModifierSet;

/// Accuracy assumed for every recomputed score.
pub const RESCORE_ACCURACY_PERCENT: f64 = 100.0;
/// Modifier set every recomputed score is computed under.
pub const RESCORE_MODS: ModifierSet = ModifierSet::DOUBLE_TIME;

/// Everything the oracle needs to score one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRequest {
    pub asset: AssetLocator,
    pub accuracy_percent: f64,
    pub mods: ModifierSet,
}

impl ScoringRequest {
    /// The fixed rescore conditions: 100% accuracy, double-time.
    pub fn rescore(asset: AssetLocator) -> Self {
        Self {
            asset,
            accuracy_percent: RESCORE_ACCURACY_PERCENT,
            mods: RESCORE_MODS,
        }
    }
}

/// Four performance-point components for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringResult {
    pub aim: f64,
    pub speed: f64,
    pub accuracy: f64,
    pub overall: f64,
}
