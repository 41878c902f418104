//! Domain services: one use-case facade per entity.
//!
//! # Responsibility
//! - Expose only the operations the portal screens need per entity.
//! - Keep services storage-agnostic; every call goes through `LocalStore`.
//!
//! # Invariants
//! - `add` prepends (newest first); contact submissions append.
//! - `update` replaces in place and reports `NotFound` for unknown ids
//!   without touching storage.
//! - No validation beyond required form fields.

use crate::model::Record;
use crate::store::{KeyValueStore, LocalStore, StoreError, StoreResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod achievement_service;
pub mod assignment_service;
pub mod attendance_service;
pub mod contact_service;
pub mod faculty_service;
pub mod lab_service;
pub mod mark_service;
pub mod note_service;
pub mod profile_service;
pub mod student_import;
pub mod student_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for entity use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure.
    Store(StoreError),
    /// `update` targeted an id absent from the collection.
    NotFound {
        collection: &'static str,
        id: String,
    },
    /// A form-required field was blank.
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    /// Student import file could not be read.
    Import(student_import::ImportError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound { collection, id } => {
                write!(f, "no record with id `{id}` in {collection}")
            }
            Self::MissingField { entity, field } => {
                write!(f, "{entity} requires a non-empty `{field}`")
            }
            Self::Import(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Import(err) => Some(err),
            Self::NotFound { .. } | Self::MissingField { .. } => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<student_import::ImportError> for ServiceError {
    fn from(value: student_import::ImportError) -> Self {
        Self::Import(value)
    }
}

pub(crate) fn require(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::MissingField { entity, field });
    }
    Ok(())
}

pub(crate) fn list_records<S: KeyValueStore, R: Record>(
    store: &LocalStore<S>,
) -> StoreResult<Vec<R>> {
    store.read_collection(R::COLLECTION_KEY, R::seed)
}

/// Puts `batch` (in order) ahead of the stored records.
pub(crate) fn prepend_records<S: KeyValueStore, R: Record>(
    store: &LocalStore<S>,
    batch: Vec<R>,
) -> StoreResult<()> {
    let existing: Vec<R> = list_records(store)?;
    let mut combined = batch;
    combined.extend(existing);
    store.write_collection(R::COLLECTION_KEY, &combined)
}

pub(crate) fn append_record<S: KeyValueStore, R: Record>(
    store: &LocalStore<S>,
    record: R,
) -> StoreResult<()> {
    let mut records: Vec<R> = list_records(store)?;
    records.push(record);
    store.write_collection(R::COLLECTION_KEY, &records)
}

pub(crate) fn replace_record<S: KeyValueStore, R: Record>(
    store: &LocalStore<S>,
    record: R,
) -> ServiceResult<()> {
    let mut records: Vec<R> = list_records(store)?;
    let Some(slot) = records.iter_mut().find(|existing| existing.id() == record.id()) else {
        return Err(ServiceError::NotFound {
            collection: R::COLLECTION_NAME,
            id: record.id().to_string(),
        });
    };
    *slot = record;
    store.write_collection(R::COLLECTION_KEY, &records)?;
    Ok(())
}

/// Removes every record with `id`. Returns whether anything was removed.
pub(crate) fn remove_record<S: KeyValueStore, R: Record>(
    store: &LocalStore<S>,
    id: &str,
) -> StoreResult<bool> {
    let records: Vec<R> = list_records(store)?;
    let before = records.len();
    let kept: Vec<R> = records.into_iter().filter(|record| record.id() != id).collect();
    if kept.len() == before {
        return Ok(false);
    }
    store.write_collection(R::COLLECTION_KEY, &kept)?;
    Ok(true)
}
