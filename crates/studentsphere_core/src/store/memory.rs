//! In-process key-value backend.

use super::{entry_size, KeyValueStore, StoreError, StoreResult};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Map-backed store for tests and ephemeral sessions.
///
/// Supports an optional byte quota (key + value lengths summed across all
/// entries) and a disabled mode in which every call fails with
/// `StoreError::Unavailable`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes growing past `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Creates a store that behaves like disabled browser storage.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, BTreeMap<String, String>>> {
        if self.disabled {
            return Err(StoreError::Unavailable(
                "memory store is disabled".to_string(),
            ));
        }
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    fn check_quota(
        &self,
        entries: &BTreeMap<String, String>,
        key: &str,
        value: &str,
    ) -> StoreResult<()> {
        let Some(quota_bytes) = self.quota_bytes else {
            return Ok(());
        };
        let others: usize = entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, stored)| entry_size(existing, stored))
            .sum();
        let requested_bytes = others + entry_size(key, value);
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

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.lock()?;
        self.check_quota(&entries, key, value)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn insert_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut entries = self.lock()?;
        if entries.contains_key(key) {
            return Ok(false);
        }
        self.check_quota(&entries, key, value)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::store::{KeyValueStore, StoreError};

    #[test]
    fn insert_if_absent_keeps_first_value() {
        let store = MemoryStore::new();
        assert!(store.insert_if_absent("k", "first").unwrap());
        assert!(!store.insert_if_absent("k", "second").unwrap());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn quota_counts_replacement_not_previous_value() {
        let store = MemoryStore::with_quota(9);
        store.set("k", "12345678").unwrap();
        store.set("k", "abcdefgh").unwrap();

        let err = store.set("k", "123456789").unwrap_err();
        assert!(matches!(
            err,
            StoreError::QuotaExceeded {
                requested_bytes: 10,
                quota_bytes: Some(9),
                ..
            }
        ));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("abcdefgh"));
    }

    #[test]
    fn disabled_store_fails_every_call() {
        let store = MemoryStore::disabled();
        assert!(matches!(store.get("k"), Err(StoreError::Unavailable(_))));
        assert!(matches!(store.set("k", "v"), Err(StoreError::Unavailable(_))));
        assert!(store.is_empty());
    }
}
