//! Durability pragmas applied when the store is opened.

use mapscore_core::config::Durability;
use mapscore_core::errors::StorageError;
use rusqlite::Connection;

/// Pragma values currently in effect on a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PragmaSnapshot {
    /// 0 = OFF, 1 = NORMAL, 2 = FULL, 3 = EXTRA.
    pub synchronous: i64,
    pub journal_mode: String,
    /// 0 = DEFAULT, 1 = FILE, 2 = MEMORY.
    pub temp_store: i64,
    pub locking_mode: String,
}

/// Apply the pragmas for the chosen durability mode.
///
/// `count_changes` is switched off in both modes so UPDATE statements never
/// return a result row.
pub fn apply_durability(conn: &Connection, durability: Durability) -> Result<(), StorageError> {
    match durability {
        Durability::Relaxed => {
            set(conn, "synchronous", "OFF")?;
            set(conn, "count_changes", "OFF")?;
            set_and_check(conn, "journal_mode", "MEMORY")?;
            set(conn, "temp_store", "MEMORY")?;
            set_and_check(conn, "locking_mode", "EXCLUSIVE")?;
        }
        Durability::Safe => {
            set(conn, "synchronous", "FULL")?;
            set(conn, "count_changes", "OFF")?;
            set_and_check(conn, "journal_mode", "DELETE")?;
            set(conn, "temp_store", "DEFAULT")?;
        }
    }
    Ok(())
}

/// Read back the pragmas `apply_durability` touches.
pub fn snapshot(conn: &Connection) -> Result<PragmaSnapshot, StorageError> {
    Ok(PragmaSnapshot {
        synchronous: conn
            .pragma_query_value(None, "synchronous", |row| row.get(0))
            .map_err(query_err)?,
        journal_mode: conn
            .pragma_query_value(None, "journal_mode", |row| row.get(0))
            .map_err(query_err)?,
        temp_store: conn
            .pragma_query_value(None, "temp_store", |row| row.get(0))
            .map_err(query_err)?,
        locking_mode: conn
            .pragma_query_value(None, "locking_mode", |row| row.get(0))
            .map_err(query_err)?,
    })
}

fn set(conn: &Connection, name: &str, value: &str) -> Result<(), StorageError> {
    conn.pragma_update(None, name, value)
        .map_err(|e| pragma_err(name, value, e))
}

// journal_mode and locking_mode echo the new value back as a row.
fn set_and_check(conn: &Connection, name: &str, value: &str) -> Result<(), StorageError> {
    conn.pragma_update_and_check(None, name, value, |row| row.get::<_, String>(0))
        .map(|_| ())
        .map_err(|e| pragma_err(name, value, e))
}

fn pragma_err(name: &str, value: &str, e: rusqlite::Error) -> StorageError {
    StorageError::StoreUnavailable {
        path: String::new(),
        message: format!("PRAGMA {name}={value}: {e}"),
    }
}

fn query_err(e: rusqlite::Error) -> StorageError {
    StorageError::QueryFailed {
        message: e.to_string(),
    }
}
