//! In-memory write buffer flushed as one transaction.
//!
//! Updates are kept in staging order and only touch the database on
//! `commit`. A sweep that stops before that leaves the store exactly as it
//! was.

use mapscore_core::errors::StorageError;
use mapscore_core::WriteStats;
use rusqlite::Connection;
use tracing::debug;

use super::rows::ScoreUpdateRow;
use crate::queries::maps::update_map_scores;

pub struct BatchWriter {
    buffer: Vec<ScoreUpdateRow>,
}

impl BatchWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn stage(&mut self, row: ScoreUpdateRow) {
        self.buffer.push(row);
    }

    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop every staged row. Returns how many were dropped.
    pub fn discard(&mut self) -> usize {
        let dropped = self.buffer.len();
        self.buffer.clear();
        dropped
    }

    /// Write every staged row inside a single transaction.
    ///
    /// The buffer is cleared only after the commit succeeds; on error the
    /// transaction rolls back and the rows stay staged.
    pub fn commit(&mut self, conn: &Connection) -> Result<WriteStats, StorageError> {
        let mut stats = WriteStats::default();
        if self.buffer.is_empty() {
            return Ok(stats);
        }

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| StorageError::WriteFailure {
                message: format!("begin transaction: {e}"),
            })?;

        let matched = update_map_scores(&tx, &self.buffer)?;

        tx.commit().map_err(|e| StorageError::WriteFailure {
            message: format!("commit: {e}"),
        })?;

        stats.score_rows = self.buffer.len();
        stats.unmatched_rows = self.buffer.len() - matched;
        stats.flushes = 1;
        debug!(rows = stats.score_rows, "batch committed");

        self.buffer.clear();
        Ok(stats)
    }
}

impl Default for BatchWriter {
    fn default() -> Self {
        Self::new()
    }
}
