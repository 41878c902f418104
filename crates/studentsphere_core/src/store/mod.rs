//! Local Store: typed collections and singleton records over a key-value
//! backend.
//!
//! # Responsibility
//! - Define the injectable `KeyValueStore` capability (get/set by key).
//! - Provide in-memory and SQLite backends.
//! - Layer typed JSON collection/singleton access with seed-on-absence on top.
//!
//! # Invariants
//! - Each key holds exactly one JSON document (array or object).
//! - Writes replace the whole document for one key; there are no
//!   multi-key transactions.
//! - Concurrent writers to one key resolve as last-write-wins.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod keys;
mod latency;
mod local;
mod memory;
mod sqlite;

pub use latency::{LatencyClass, LatencyProfile};
pub use local::LocalStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by storage backends and typed store access.
#[derive(Debug)]
pub enum StoreError {
    /// The write would exceed the backend's storage quota. `quota_bytes` is
    /// `None` when the backend reported itself full without a known limit.
    QuotaExceeded {
        key: String,
        requested_bytes: usize,
        quota_bytes: Option<usize>,
    },
    /// The backend cannot be used right now (disabled, locked, unreadable).
    Unavailable(String),
    /// Stored data under `key` is not valid JSON for the expected type.
    DataCorruption {
        key: String,
        source: serde_json::Error,
    },
    /// A value could not be encoded for storage.
    Serialization {
        key: String,
        source: serde_json::Error,
    },
    /// Any other SQLite failure.
    Db(DbError),
}

impl StoreError {
    /// Whether the caller may retry the same call later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. } | Self::Unavailable(_))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded {
                key,
                requested_bytes,
                quota_bytes: Some(quota_bytes),
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: {requested_bytes} bytes requested, quota is {quota_bytes}"
            ),
            Self::QuotaExceeded {
                key,
                requested_bytes,
                quota_bytes: None,
            } => write!(
                f,
                "storage full writing `{key}` ({requested_bytes} bytes requested)"
            ),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
            Self::DataCorruption { key, source } => {
                write!(f, "stored data under `{key}` is corrupt: {source}")
            }
            Self::Serialization { key, source } => {
                write!(f, "failed to encode value for `{key}`: {source}")
            }
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DataCorruption { source, .. } | Self::Serialization { source, .. } => {
                Some(source)
            }
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } | Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Raw string storage addressed by key.
///
/// Implementations take `&self` for writes; interior mutability is the
/// backend's concern.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Writes `value` only when `key` is absent. Returns whether it wrote.
    fn insert_if_absent(&self, key: &str, value: &str) -> StoreResult<bool>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn insert_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        (**self).insert_if_absent(key, value)
    }
}

fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}
