//! map table queries.

use mapscore_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

use crate::batch::rows::ScoreUpdateRow;

pub const MAP_TABLE: &str = "map";
pub const REQUIRED_MAP_COLUMNS: [&str; 5] =
    ["id", "dt_aim_pp", "dt_speed_pp", "dt_acc_pp", "dt_overall_pp"];

/// The double-time score columns of one map row.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScoresRecord {
    pub id: i64,
    pub dt_aim_pp: Option<f64>,
    pub dt_speed_pp: Option<f64>,
    pub dt_acc_pp: Option<f64>,
    pub dt_overall_pp: Option<f64>,
}

impl MapScoresRecord {
    pub fn is_scored(&self) -> bool {
        self.dt_aim_pp.is_some()
            && self.dt_speed_pp.is_some()
            && self.dt_acc_pp.is_some()
            && self.dt_overall_pp.is_some()
    }
}

/// All map ids, in the table's native order.
pub fn select_all_map_ids(conn: &Connection) -> Result<Vec<i64>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT id FROM map")
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    rows.collect::<Result<Vec<i64>, _>>()
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })
}

/// Update the four score columns for each row. Returns how many updates
/// matched an existing map.
pub fn update_map_scores(
    conn: &Connection,
    rows: &[ScoreUpdateRow],
) -> Result<usize, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "UPDATE map
             SET dt_aim_pp = ?1, dt_speed_pp = ?2, dt_acc_pp = ?3, dt_overall_pp = ?4
             WHERE id = ?5",
        )
        .map_err(|e| StorageError::WriteFailure { message: e.to_string() })?;

    let mut matched = 0;
    for row in rows {
        matched += stmt
            .execute(params![row.aim, row.speed, row.accuracy, row.overall, row.map_id])
            .map_err(|e| StorageError::WriteFailure {
                message: format!("map {}: {e}", row.map_id),
            })?;
    }
    Ok(matched)
}

/// Read one map's score columns.
pub fn get_map_scores(
    conn: &Connection,
    map_id: i64,
) -> Result<Option<MapScoresRecord>, StorageError> {
    conn.query_row(
        "SELECT id, dt_aim_pp, dt_speed_pp, dt_acc_pp, dt_overall_pp FROM map WHERE id = ?1",
        params![map_id],
        |row| {
            Ok(MapScoresRecord {
                id: row.get(0)?,
                dt_aim_pp: row.get(1)?,
                dt_speed_pp: row.get(2)?,
                dt_acc_pp: row.get(3)?,
                dt_overall_pp: row.get(4)?,
            })
        },
    )
    .optional()
    .map_err(|e| StorageError::QueryFailed { message: e.to_string() })
}

/// Read every map's score columns ordered by id.
pub fn get_all_map_scores(conn: &Connection) -> Result<Vec<MapScoresRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, dt_aim_pp, dt_speed_pp, dt_acc_pp, dt_overall_pp FROM map ORDER BY id",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MapScoresRecord {
                id: row.get(0)?,
                dt_aim_pp: row.get(1)?,
                dt_speed_pp: row.get(2)?,
                dt_acc_pp: row.get(3)?,
                dt_overall_pp: row.get(4)?,
            })
        })
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })
}
