use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::STORAGE_KEY;

pub const DEFAULT_DATA_DIR: &str = ".todos";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings for the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the persisted store.
    pub data_dir: PathBuf,
    /// Key the store is persisted under.
    pub storage_key: String,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: STORAGE_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Builds a config from optional overrides, falling back to defaults.
    pub fn from_options(data_dir: Option<PathBuf>, log_level: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        if let Some(level) = log_level {
            config.log_level = level;
        }
        config
    }
}
