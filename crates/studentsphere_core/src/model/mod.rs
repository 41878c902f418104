//! Portal domain records.
//!
//! # Responsibility
//! - Define the plain records persisted by the Local Store.
//! - Bind every collection record to its storage key and seed set.
//!
//! # Invariants
//! - Records are identified by an opaque string `id`, unique per collection
//!   by caller convention (not enforced).
//! - Records serialize with camelCase field names and deserialize missing
//!   fields as empty/zero/absent, so older stored documents stay readable.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod achievement;
pub mod assignment;
pub mod attendance;
pub mod contact;
pub mod faculty;
pub mod id;
pub mod lab;
pub mod mark;
pub mod note;
pub mod profile;
pub mod student;

/// A record stored as one element of a keyed collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage key of the collection.
    const COLLECTION_KEY: &'static str;
    /// Human-readable collection name used in errors and logs.
    const COLLECTION_NAME: &'static str;

    fn id(&self) -> &str;

    /// Default records written the first time the collection is observed
    /// empty.
    fn seed() -> Vec<Self>;
}
