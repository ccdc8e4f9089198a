//! `IMapScoreStore` — the record store as seen by the rescorer.
//!
//! Reads the id list once, stages keyed score updates in memory and
//! commits them as one transaction. Nothing staged is visible until
//! `commit_scores` succeeds.

use crate::errors::StorageError;
use crate::types::scoring::ScoringResult;

/// Statistics from one commit of the batch writer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteStats {
    /// Update statements executed.
    pub score_rows: usize,
    /// Updates whose id matched no row.
    pub unmatched_rows: usize,
    pub flushes: usize,
}

pub trait IMapScoreStore {
    /// Every map id in the store, in the store's native order.
    fn load_map_ids(&self) -> Result<Vec<i64>, StorageError>;

    /// Buffer an update of one map's four score columns.
    fn stage_scores(&mut self, map_id: i64, scores: &ScoringResult) -> Result<(), StorageError>;

    /// Number of updates buffered and not yet committed.
    fn pending_scores(&self) -> usize;

    /// Apply every buffered update in a single transaction.
    /// On failure the transaction rolls back and the buffer is kept.
    fn commit_scores(&mut self) -> Result<WriteStats, StorageError>;

    /// Drop every buffered update without writing. Returns how many were dropped.
    fn discard_scores(&mut self) -> usize;
}
