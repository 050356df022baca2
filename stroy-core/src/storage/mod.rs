//! Persistent slots
//!
//! Values are stored as JSON text. Reads that fail to parse surface as
//! `MalformedPersistedState`; callers on the startup path use
//! [`read_json_or_default`], which degrades to the type's empty value.

pub mod kv;
pub mod prefs;

pub use kv::{KeyValueStore, MemoryStore, RedbStore, StorageError};
pub use prefs::SessionPrefs;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{CatalogError, CatalogResult};

/// Decode a slot; `Ok(None)` when it is absent
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> CatalogResult<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| CatalogError::malformed_state(key, e.to_string()))
}

/// Decode a slot, falling back to `T::default()` on absence or any failure
pub fn read_json_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match read_json(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(key = %key, code = %e.code(), error = %e, "Discarding persisted state");
            T::default()
        }
    }
}

/// Encode and store a slot
pub fn write_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> CatalogResult<()> {
    let raw = serde_json::to_string(value).map_err(|e| CatalogError::storage(e.to_string()))?;
    store.set(key, &raw)
}
