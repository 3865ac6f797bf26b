//! SQLite-backed reading store.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, ToSql};

use super::{poisoned, ReadingStore};
use crate::error::StorageError;
use crate::types::{CanonicalReading, NewReading, ReadingId, ReadingValue};

const CREATE_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS readings (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    sensor_type TEXT,
    value       REAL,
    unit        TEXT,
    timestamp   TEXT,
    raw_json    TEXT
);
";

const INSERT_SQL: &str =
    "INSERT INTO readings (sensor_type, value, unit, timestamp, raw_json) VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_RECENT_SQL: &str = "
SELECT id, sensor_type, value, unit, timestamp, raw_json
FROM readings
ORDER BY id DESC
LIMIT ?1
";

/// Writers waiting on a locked database give up after this long instead of
/// hanging.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Reading store persisted in a single SQLite table.
///
/// `AUTOINCREMENT` keeps ids monotonic and never reused, even after the
/// newest row is lost. All connection access goes through one mutex, so
/// appends are serialized and every query sees a consistent snapshot.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Mutex<Option<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database at `path`, creating parent directories
    /// as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = FULL;")?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database. Nothing survives a drop.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self, StorageError> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(CREATE_TABLE_SQL)?;
        tracing::debug!(path = ?path, "reading store opened");
        Ok(Self {
            path,
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Database file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let guard = self.conn.lock().map_err(poisoned)?;
        let conn = guard.as_ref().ok_or(StorageError::Closed)?;
        f(conn)
    }
}

impl ReadingStore for SqliteStore {
    fn append(&self, reading: &NewReading) -> Result<ReadingId, StorageError> {
        self.with_conn(|conn| {
            conn.execute(
                INSERT_SQL,
                params![
                    reading.sensor_type,
                    reading.value,
                    reading.unit,
                    reading.timestamp,
                    reading.raw_json,
                ],
            )?;
            let id = conn.last_insert_rowid();
            tracing::debug!(id, sensor_type = ?reading.sensor_type, "reading appended");
            Ok(id)
        })
    }

    fn query_recent(&self, limit: usize) -> Result<Vec<CanonicalReading>, StorageError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.with_conn(|conn| {
            let mut stmt = conn.prepare_cached(SELECT_RECENT_SQL)?;
            let rows = stmt.query_map(params![limit], |row| {
                Ok(CanonicalReading {
                    id: row.get(0)?,
                    sensor_type: row.get(1)?,
                    value: row.get(2)?,
                    unit: row.get(3)?,
                    timestamp: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    raw_json: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                })
            })?;
            let readings = rows.collect::<Result<Vec<_>, _>>()?;
            Ok(readings)
        })
    }

    fn count(&self) -> Result<u64, StorageError> {
        self.with_conn(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM readings", [], |row| row.get(0))?;
            Ok(n.max(0) as u64)
        })
    }

    fn close(&self) -> Result<(), StorageError> {
        let mut guard = self.conn.lock().map_err(poisoned)?;
        match guard.take() {
            Some(conn) => {
                conn.close().map_err(|(_, err)| StorageError::Sqlite(err))?;
                tracing::info!(path = ?self.path, "reading store closed");
                Ok(())
            }
            None => Err(StorageError::Closed),
        }
    }
}

// ---------------------------------------------------------------------------
// Column conversions
// ---------------------------------------------------------------------------

impl ToSql for ReadingValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            ReadingValue::Number(n) => n.to_sql(),
            ReadingValue::Text(s) => s.to_sql(),
        }
    }
}

impl FromSql for ReadingValue {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Real(n) => Ok(ReadingValue::Number(n)),
            ValueRef::Integer(n) => Ok(ReadingValue::Number(n as f64)),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                Ok(ReadingValue::Text(String::from_utf8_lossy(bytes).into_owned()))
            }
            ValueRef::Null => Err(rusqlite::types::FromSqlError::InvalidType),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
