//! Run report: what one sweep scored, skipped and wrote.

use mapscore_core::errors::error_code::MapscoreErrorCode;
use mapscore_core::errors::OracleError;
use mapscore_core::{AssetLocator, WriteStats};
use tracing::{info, warn};

use crate::errors::EXIT_INCOMPLETE;

/// A map the oracle could not score; its stored scores were left as they were.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub map_id: i64,
    pub locator: String,
    pub error_code: &'static str,
    pub message: String,
}

impl SkippedRecord {
    pub fn new(locator: &AssetLocator, error: &OracleError) -> Self {
        Self {
            map_id: locator.map_id(),
            locator: locator.to_string(),
            error_code: error.error_code(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub enumerated: usize,
    pub scored: usize,
    pub skipped: Vec<SkippedRecord>,
    pub write_stats: WriteStats,
}

impl RunReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// True when every enumerated map got fresh scores.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.scored == self.enumerated
    }

    /// Process exit status for a run that reached its commit.
    pub fn exit_code(&self) -> u8 {
        if self.is_complete() {
            0
        } else {
            EXIT_INCOMPLETE
        }
    }

    pub fn log_summary(&self) {
        info!(
            enumerated = self.enumerated,
            scored = self.scored,
            skipped = self.skipped.len(),
            written = self.write_stats.score_rows,
            unmatched = self.write_stats.unmatched_rows,
            "rescore complete"
        );
        if !self.skipped.is_empty() {
            warn!(
                skipped = self.skipped.len(),
                "some maps kept their previous scores"
            );
        }
    }

    /// One line per skipped map, for the operator's error stream.
    pub fn skipped_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.skipped
            .iter()
            .map(|s| format!("skipped map {} ({}): [{}] {}", s.map_id, s.locator, s.error_code, s.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_record_carries_error_code() {
        let locator = AssetLocator::for_map(5);
        let skipped = SkippedRecord::new(
            &locator,
            &OracleError::AssetMissing { path: "maps/5.osu".into() },
        );
        assert_eq!(skipped.map_id, 5);
        assert_eq!(skipped.locator, "maps/5.osu");
        assert_eq!(skipped.error_code, "ASSET_MISSING");

        let report = RunReport {
            enumerated: 2,
            scored: 1,
            skipped: vec![skipped],
            write_stats: WriteStats::default(),
        };
        assert!(!report.is_complete());
        assert_eq!(report.exit_code(), EXIT_INCOMPLETE);
        let lines: Vec<String> = report.skipped_lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("skipped map 5 (maps/5.osu): [ASSET_MISSING]"));
    }

    #[test]
    fn empty_run_is_complete() {
        assert!(RunReport::default().is_complete());
        assert_eq!(RunReport::default().exit_code(), 0);
    }

    #[test]
    fn scored_count_short_of_enumerated_is_incomplete() {
        let report = RunReport {
            enumerated: 3,
            scored: 2,
            ..RunReport::default()
        };
        assert!(!report.is_complete());
        assert_eq!(report.exit_code(), EXIT_INCOMPLETE);
    }
}
