pub mod app;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod logging;
pub mod storage;

pub use app::{Confirm, Deletion, ItemView, Phase, TodoApp};
pub use config::Config;
pub use entity::{Category, Item, ItemStore};
pub use error::{Result, TodoError};
pub use storage::{FileStorage, MemoryStorage, Storage, STORAGE_KEY};
