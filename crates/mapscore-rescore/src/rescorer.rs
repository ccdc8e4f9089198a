//! `BatchRescorer` — scores every enumerated map and commits once.
//!
//! Per map: derive the asset locator, print it as a progress line, ask the
//! oracle for scores at 100% accuracy with double-time, stage the update.
//! After the last map the store commits all staged updates in a single
//! transaction. An aborted sweep discards everything it staged.

use std::io::Write;

use mapscore_core::config::{AssetConfig, MapscoreConfig, OnAssetError};
use mapscore_core::errors::error_code::MapscoreErrorCode;
use mapscore_core::errors::OracleError;
use mapscore_core::{AssetLocator, IMapScoreStore, IScoringOracle, ScoringRequest, ScoringResult};
use tracing::{error, info, warn};

use crate::enumerator::{enumerate_records, RecordSnapshot};
use crate::errors::RescoreError;
use crate::report::{RunReport, SkippedRecord};

pub struct BatchRescorer<O, W> {
    oracle: O,
    progress: W,
    assets: AssetConfig,
    on_asset_error: OnAssetError,
    progress_every: usize,
}

impl<O: IScoringOracle, W: Write> BatchRescorer<O, W> {
    /// Rescorer with default asset layout, skip-on-error and a progress
    /// log line every 1000 maps.
    pub fn new(oracle: O, progress: W) -> Self {
        let defaults = MapscoreConfig::default();
        Self {
            oracle,
            progress,
            assets: defaults.assets,
            on_asset_error: defaults.rescore.on_asset_error,
            progress_every: defaults.rescore.progress_every,
        }
    }

    pub fn from_config(oracle: O, progress: W, config: &MapscoreConfig) -> Self {
        Self::new(oracle, progress)
            .with_assets(config.assets.clone())
            .with_on_asset_error(config.rescore.on_asset_error)
            .with_progress_every(config.rescore.progress_every)
    }

    pub fn with_assets(mut self, assets: AssetConfig) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_on_asset_error(mut self, policy: OnAssetError) -> Self {
        self.on_asset_error = policy;
        self
    }

    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }

    /// Give back the progress sink, e.g. to inspect what was written.
    pub fn into_progress(self) -> W {
        self.progress
    }

    /// Enumerate the store, then sweep it.
    pub fn run<S: IMapScoreStore + ?Sized>(&mut self, store: &mut S) -> Result<RunReport, RescoreError> {
        let snapshot = enumerate_records(&*store)?;
        self.sweep(store, snapshot)
    }

    /// Score every map in `snapshot`, in order, and commit the results.
    pub fn sweep<S: IMapScoreStore + ?Sized>(
        &mut self,
        store: &mut S,
        snapshot: RecordSnapshot,
    ) -> Result<RunReport, RescoreError> {
        let total = snapshot.len();
        let mut report = RunReport {
            enumerated: total,
            ..RunReport::default()
        };

        for (index, map_id) in snapshot.into_iter().enumerate() {
            let (locator, outcome) = self.rescore_record(map_id);
            match outcome {
                Ok(scores) => {
                    if let Err(e) = store.stage_scores(map_id, &scores) {
                        abandon(store);
                        return Err(e.into());
                    }
                    report.scored += 1;
                }
                Err(e) => match self.on_asset_error {
                    OnAssetError::Abort => {
                        error!(map_id, locator = %locator, code = e.error_code(), error = %e, "oracle failed, aborting sweep");
                        abandon(store);
                        return Err(RescoreError::Oracle { map_id, source: e });
                    }
                    OnAssetError::Skip => {
                        warn!(map_id, locator = %locator, code = e.error_code(), error = %e, "oracle failed, skipping map");
                        report.skipped.push(SkippedRecord::new(&locator, &e));
                    }
                },
            }
            self.log_progress(index + 1, total);
        }

        report.write_stats = store.commit_scores()?;
        info!(
            rows = report.write_stats.score_rows,
            unmatched = report.write_stats.unmatched_rows,
            "scores committed"
        );
        Ok(report)
    }

    /// Score one map. The oracle's working state lives only for this call.
    pub fn rescore_record(&mut self, map_id: i64) -> (AssetLocator, Result<ScoringResult, OracleError>) {
        let locator = self.assets.locator(map_id);
        // Advisory only; a closed stdout must not stop the sweep.
        let _ = writeln!(self.progress, "{locator}");

        let request = ScoringRequest::rescore(locator);
        let outcome = self.oracle.compute_score(&request);
        (request.asset, outcome)
    }

    fn log_progress(&self, done: usize, total: usize) {
        if self.progress_every > 0 && (done % self.progress_every == 0 || done == total) {
            info!("{done}/{total} maps rescored");
        }
    }
}

fn abandon<S: IMapScoreStore + ?Sized>(store: &mut S) {
    let dropped = store.discard_scores();
    warn!(dropped, "sweep aborted, staged updates discarded");
}
