//! Whole-store load and save.
//!
//! Both directions fail soft: errors are logged and swallowed, so callers
//! never see a persistence failure.

use tracing::{debug, warn};

use super::Storage;
use crate::entity::ItemStore;

/// Key the item store is persisted under.
pub const STORAGE_KEY: &str = "@toDos";

/// Reads the store under `key`.
///
/// A missing key, a stored `null`, a read failure and unparseable JSON all
/// yield an empty store.
pub fn load<S: Storage + ?Sized>(storage: &S, key: &str) -> ItemStore {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored to-dos");
            return ItemStore::new();
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read to-dos");
            return ItemStore::new();
        }
    };

    match serde_json::from_str::<Option<ItemStore>>(&raw) {
        Ok(store) => {
            let store = store.unwrap_or_default();
            debug!(key, count = store.len(), "loaded to-dos");
            store
        }
        Err(e) => {
            warn!(key, error = %e, "failed to parse stored to-dos");
            ItemStore::new()
        }
    }
}

/// Writes the whole store under `key`. Failures are logged only.
pub fn save<S: Storage + ?Sized>(storage: &mut S, key: &str, store: &ItemStore) {
    let raw = match serde_json::to_string(store) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(key, error = %e, "failed to serialize to-dos");
            return;
        }
    };

    match storage.set_item(key, &raw) {
        Ok(()) => debug!(key, count = store.len(), "saved to-dos"),
        Err(e) => warn!(key, error = %e, "failed to save to-dos"),
    }
}
