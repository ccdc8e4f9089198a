//! Record enumeration: snapshot the id list once, before any work.

use mapscore_core::errors::StorageError;
use mapscore_core::IMapScoreStore;
use tracing::info;

/// Map ids to rescore, in the store's native order.
///
/// Taken once at sweep start; rows inserted afterwards are not seen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordSnapshot {
    ids: Vec<i64>,
}

impl RecordSnapshot {
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<i64>> for RecordSnapshot {
    fn from(ids: Vec<i64>) -> Self {
        Self { ids }
    }
}

impl IntoIterator for RecordSnapshot {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

/// Read every id in the store. No filtering: already-scored maps are included.
pub fn enumerate_records<S: IMapScoreStore + ?Sized>(
    store: &S,
) -> Result<RecordSnapshot, StorageError> {
    let ids = store.load_map_ids()?;
    info!(count = ids.len(), "maps to rescore");
    Ok(RecordSnapshot { ids })
}
