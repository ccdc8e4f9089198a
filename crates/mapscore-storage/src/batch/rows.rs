//! Row types staged in the batch writer.

use mapscore_core::ScoringResult;

/// One pending update of a map's four double-time score columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreUpdateRow {
    pub map_id: i64,
    pub aim: f64,
    pub speed: f64,
    pub accuracy: f64,
    pub overall: f64,
}

impl ScoreUpdateRow {
    pub fn new(map_id: i64, scores: &ScoringResult) -> Self {
        Self {
            map_id,
            aim: scores.aim,
            speed: scores.speed,
            accuracy: scores.accuracy,
            overall: scores.overall,
        }
    }
}
