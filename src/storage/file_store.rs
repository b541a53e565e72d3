use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Storage;
use crate::error::{Result, TodoError};

/// Keeps each key in its own JSON file under a data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`; `@toDos` maps to `toDos.json`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let name: String = key
            .trim_start_matches('@')
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if name.is_empty() {
            return Err(TodoError::Storage(format!(
                "storage key '{}' has no usable file name",
                key
            )));
        }

        Ok(self.dir.join(format!("{}.json", name)))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_for_strips_prefix() {
        let storage = FileStorage::new("/data");
        assert_eq!(
            storage.path_for("@toDos").unwrap(),
            PathBuf::from("/data/toDos.json")
        );
        assert_eq!(
            storage.path_for("a/b").unwrap(),
            PathBuf::from("/data/a_b.json")
        );
    }

    #[test]
    fn test_path_for_rejects_empty_name() {
        let storage = FileStorage::new("/data");
        assert!(matches!(storage.path_for("@"), Err(TodoError::Storage(_))));
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::new(tmp.path().join("nested"));
        assert_eq!(storage.get_item("@toDos").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_reads_back() {
        let tmp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(tmp.path().join("nested"));

        storage.set_item("@toDos", "{}").unwrap();

        assert!(tmp.path().join("nested/toDos.json").exists());
        assert_eq!(storage.get_item("@toDos").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_set_overwrites_whole_value() {
        let tmp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(tmp.path());

        storage.set_item("@toDos", r#"{"1":{"text":"a","working":true}}"#).unwrap();
        storage.set_item("@toDos", "{}").unwrap();

        assert_eq!(storage.get_item("@toDos").unwrap().as_deref(), Some("{}"));
    }
}
