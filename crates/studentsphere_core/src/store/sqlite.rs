//! SQLite-backed key-value store.
//!
//! # Invariants
//! - All entries live in the single `kv_entries` table.
//! - SQLite "full"/"too big" failures surface as `StoreError::QuotaExceeded`;
//!   open, lock and permission failures surface as `StoreError::Unavailable`.

use super::{entry_size, KeyValueStore, StoreError, StoreResult};
use crate::db::migrations::apply_migrations;
use crate::db::{open_db, open_db_in_memory, DbError};
use log::warn;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;

/// Durable store kept in one SQLite file.
pub struct SqliteStore {
    conn: Connection,
    quota_bytes: Option<usize>,
}

impl SqliteStore {
    /// Opens (or creates) the store file at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = open_db(path).map_err(map_db_error)?;
        Ok(Self::with_connection(conn))
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory().map_err(map_db_error)?;
        Ok(Self::with_connection(conn))
    }

    /// Wraps an existing connection, applying pending migrations first.
    pub fn from_connection(mut conn: Connection) -> StoreResult<Self> {
        apply_migrations(&mut conn).map_err(map_db_error)?;
        Ok(Self::with_connection(conn))
    }

    /// Caps the total stored bytes (keys plus values).
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Read-only access to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn with_connection(conn: Connection) -> Self {
        Self {
            conn,
            quota_bytes: None,
        }
    }

    fn check_quota(&self, key: &str, value: &str) -> StoreResult<()> {
        let Some(quota_bytes) = self.quota_bytes else {
            return Ok(());
        };
        let others: i64 = self
            .conn
            .query_row(
                "SELECT COALESCE(SUM(length(CAST(key AS BLOB)) + length(CAST(value AS BLOB))), 0)
                 FROM kv_entries
                 WHERE key <> ?1;",
                [key],
                |row| row.get(0),
            )
            .map_err(|err| map_sqlite_error(key, value, err))?;
        let requested_bytes = usize::try_from(others)
            .unwrap_or(usize::MAX)
            .saturating_add(entry_size(key, value));
        if requested_bytes > quota_bytes {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                requested_bytes,
                quota_bytes: Some(quota_bytes),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|err| map_sqlite_error(key, "", err))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check_quota(key, value)?;
        self.conn
            .execute(
                "INSERT INTO kv_entries (key, value, updated_at)
                 VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at;",
                params![key, value],
            )
            .map_err(|err| map_sqlite_error(key, value, err))?;
        Ok(())
    }

    fn insert_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        if self.get(key)?.is_some() {
            return Ok(false);
        }
        self.check_quota(key, value)?;
        let changed = self
            .conn
            .execute(
                "INSERT OR IGNORE INTO kv_entries (key, value) VALUES (?1, ?2);",
                params![key, value],
            )
            .map_err(|err| map_sqlite_error(key, value, err))?;
        Ok(changed == 1)
    }
}

fn map_db_error(err: DbError) -> StoreError {
    match err {
        DbError::Sqlite(inner) => classify(inner, None),
        other => StoreError::Db(other),
    }
}

fn map_sqlite_error(key: &str, value: &str, err: rusqlite::Error) -> StoreError {
    classify(err, Some((key, entry_size(key, value))))
}

fn classify(err: rusqlite::Error, write: Option<(&str, usize)>) -> StoreError {
    let code = match &err {
        rusqlite::Error::SqliteFailure(failure, _) => Some(failure.code),
        _ => None,
    };
    match code {
        Some(ErrorCode::DiskFull | ErrorCode::TooBig) => {
            let (key, requested_bytes) = write.unwrap_or(("", 0));
            warn!("event=store_write module=store status=error error_code=quota_exceeded key={key}");
            StoreError::QuotaExceeded {
                key: key.to_string(),
                requested_bytes,
                quota_bytes: None,
            }
        }
        Some(
            ErrorCode::CannotOpen
            | ErrorCode::PermissionDenied
            | ErrorCode::ReadOnly
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::SystemIoFailure
            | ErrorCode::NotADatabase
            | ErrorCode::FileLockingProtocolFailed,
        ) => {
            warn!("event=store_access module=store status=error error_code=unavailable error={err}");
            StoreError::Unavailable(err.to_string())
        }
        _ => StoreError::Db(DbError::Sqlite(err)),
    }
}
