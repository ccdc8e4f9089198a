//! `DatabaseManager` — owns the single connection to the record store.
//!
//! The store is never created here: schema creation is somebody else's job.
//! Opening fails with `StoreUnavailable` when the file is missing or cannot
//! be opened, and with `SchemaMismatch` when the `map` table lacks a column
//! the rescorer writes.

use std::path::{Path, PathBuf};

use mapscore_core::config::Durability;
use mapscore_core::errors::StorageError;
use rusqlite::{Connection, OpenFlags};

use crate::pragmas;
use crate::queries::maps::{MAP_TABLE, REQUIRED_MAP_COLUMNS};

pub struct DatabaseManager {
    conn: Connection,
    path: PathBuf,
    durability: Durability,
}

impl DatabaseManager {
    /// Open an existing store read-write and apply the durability pragmas.
    pub fn open(path: &Path, durability: Durability) -> Result<Self, StorageError> {
        let unavailable = |message: String| StorageError::StoreUnavailable {
            path: path.display().to_string(),
            message,
        };

        if !path.is_file() {
            return Err(unavailable("database file does not exist".to_string()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| unavailable(e.to_string()))?;

        pragmas::apply_durability(&conn, durability).map_err(|e| match e {
            StorageError::StoreUnavailable { message, .. } => unavailable(message),
            other => other,
        })?;
        verify_schema(&conn)?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
            durability,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn durability(&self) -> Durability {
        self.durability
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Raw access for operations not covered by a query function.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        f(&self.conn)
    }
}

/// Check that `map` exists with every column the rescorer touches.
fn verify_schema(conn: &Connection) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1)")
        .map_err(|e| StorageError::SchemaMismatch {
            message: e.to_string(),
        })?;
    let columns = stmt
        .query_map([MAP_TABLE], |row| row.get::<_, String>(0))
        .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
        .map_err(|e| StorageError::SchemaMismatch {
            message: e.to_string(),
        })?;

    if columns.is_empty() {
        return Err(StorageError::SchemaMismatch {
            message: format!("table `{MAP_TABLE}` not found"),
        });
    }

    let missing: Vec<&str> = REQUIRED_MAP_COLUMNS
        .iter()
        .copied()
        .filter(|required| !columns.iter().any(|c| c.eq_ignore_ascii_case(required)))
        .collect();
    if !missing.is_empty() {
        return Err(StorageError::SchemaMismatch {
            message: format!("table `{MAP_TABLE}` is missing columns: {}", missing.join(", ")),
        });
    }

    Ok(())
}
