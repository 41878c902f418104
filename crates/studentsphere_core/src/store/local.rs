//! Typed JSON access over a `KeyValueStore`.
//!
//! # Invariants
//! - A key absent from the backend is seeded exactly once; concurrent seeders
//!   converge on whichever value landed first.
//! - Malformed stored JSON is reported as `StoreError::DataCorruption`, never
//!   replaced by the seed.

use super::{KeyValueStore, LatencyClass, LatencyProfile, StoreError, StoreResult};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed store facade shared by all domain services.
pub struct LocalStore<S: KeyValueStore> {
    backend: S,
    latency: LatencyProfile,
}

impl<S: KeyValueStore> LocalStore<S> {
    /// Wraps `backend` with the default simulated latency.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            latency: LatencyProfile::default(),
        }
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    /// Applies the simulated delay for one call of `class`.
    pub fn simulate(&self, class: LatencyClass) {
        self.latency.pause(class);
    }

    /// Returns the sequence under `key`, writing `seed()` first when absent.
    pub fn read_collection<T>(&self, key: &str, seed: impl FnOnce() -> Vec<T>) -> StoreResult<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        self.read_or_seed(key, seed)
    }

    /// Overwrites the whole sequence under `key`.
    pub fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        let encoded = encode(key, &items)?;
        self.backend.set(key, &encoded)?;
        debug!(
            "event=store_write module=store status=ok key={} items={} bytes={}",
            key,
            items.len(),
            encoded.len()
        );
        Ok(())
    }

    /// Returns the single record under `key`, writing `seed()` first when
    /// absent.
    pub fn read_singleton<T>(&self, key: &str, seed: impl FnOnce() -> T) -> StoreResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        self.read_or_seed(key, seed)
    }

    /// Overwrites the single record under `key`.
    pub fn write_singleton<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let encoded = encode(key, value)?;
        self.backend.set(key, &encoded)?;
        debug!(
            "event=store_write module=store status=ok key={} bytes={}",
            key,
            encoded.len()
        );
        Ok(())
    }

    /// Seeds `key` when absent without reading it back.
    ///
    /// Returns `true` when this call wrote the seed.
    pub fn ensure_initialized<T: Serialize>(
        &self,
        key: &str,
        seed: impl FnOnce() -> T,
    ) -> StoreResult<bool> {
        if self.backend.get(key)?.is_some() {
            return Ok(false);
        }
        let encoded = encode(key, &seed())?;
        let written = self.backend.insert_if_absent(key, &encoded)?;
        if written {
            info!("event=store_seed module=store status=ok key={key}");
        }
        Ok(written)
    }

    fn read_or_seed<T>(&self, key: &str, seed: impl FnOnce() -> T) -> StoreResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some(raw) = self.backend.get(key)? {
            return decode(key, &raw);
        }

        let value = seed();
        let encoded = encode(key, &value)?;
        if self.backend.insert_if_absent(key, &encoded)? {
            info!("event=store_seed module=store status=ok key={key}");
            return Ok(value);
        }

        // Another writer seeded first.
        match self.backend.get(key)? {
            Some(raw) => decode(key, &raw),
            None => Ok(value),
        }
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> StoreResult<String> {
    serde_json::to_string(value).map_err(|source| StoreError::Serialization {
        key: key.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> StoreResult<T> {
    serde_json::from_str(raw).map_err(|source| {
        log::error!("event=store_read module=store status=error error_code=data_corruption key={key}");
        StoreError::DataCorruption {
            key: key.to_string(),
            source,
        }
    })
}
