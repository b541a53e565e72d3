mod file_store;
mod memory;
mod persistence;

pub use file_store::FileStorage;
pub use memory::MemoryStorage;
pub use persistence::{load, save, STORAGE_KEY};

use crate::error::Result;

/// A string key-value device store.
///
/// Values are whole blobs: there are no partial updates.
pub trait Storage {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}
