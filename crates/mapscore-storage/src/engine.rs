//! `MapStorageEngine` — the record store used by the rescorer.
//!
//! Wraps `DatabaseManager` (the one connection) and `BatchWriter` (the
//! staged updates). This is the single owner of both; nothing else writes
//! to the store while a sweep runs.

use std::path::Path;

use mapscore_core::config::Durability;
use mapscore_core::errors::StorageError;
use mapscore_core::{IMapScoreStore, ScoringResult, WriteStats};
use tracing::info;

use crate::batch::{BatchWriter, ScoreUpdateRow};
use crate::connection::DatabaseManager;
use crate::queries::maps::{self, MapScoresRecord};

pub struct MapStorageEngine {
    db: DatabaseManager,
    batch: BatchWriter,
}

impl MapStorageEngine {
    /// Open an existing store and apply the durability pragmas.
    pub fn open(path: &Path, durability: Durability) -> Result<Self, StorageError> {
        let db = DatabaseManager::open(path, durability)?;
        info!(path = %db.path().display(), %durability, "record store opened");
        Ok(Self {
            db,
            batch: BatchWriter::new(),
        })
    }

    pub fn durability(&self) -> Durability {
        self.db.durability()
    }

    /// Score columns for one map, as currently committed.
    pub fn load_map_scores(&self, map_id: i64) -> Result<Option<MapScoresRecord>, StorageError> {
        maps::get_map_scores(self.db.connection(), map_id)
    }

    /// Score columns for every map, ordered by id.
    pub fn load_all_map_scores(&self) -> Result<Vec<MapScoresRecord>, StorageError> {
        maps::get_all_map_scores(self.db.connection())
    }

    /// Raw access for operations not covered by a query function.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&rusqlite::Connection) -> Result<T, StorageError>,
    {
        self.db.with_conn(f)
    }
}

impl IMapScoreStore for MapStorageEngine {
    fn load_map_ids(&self) -> Result<Vec<i64>, StorageError> {
        maps::select_all_map_ids(self.db.connection())
    }

    fn stage_scores(&mut self, map_id: i64, scores: &ScoringResult) -> Result<(), StorageError> {
        self.batch.stage(ScoreUpdateRow::new(map_id, scores));
        Ok(())
    }

    fn pending_scores(&self) -> usize {
        self.batch.pending()
    }

    fn commit_scores(&mut self) -> Result<WriteStats, StorageError> {
        self.batch.commit(self.db.connection())
    }

    fn discard_scores(&mut self) -> usize {
        self.batch.discard()
    }
}
