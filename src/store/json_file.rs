//! File-backed snapshot store: one JSON blob per path.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{SnapshotStore, StoreError};

/// Stores the snapshot blob in a single file.
///
/// A missing file is a normal first-run condition and loads as `None`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        fs::write(&self.path, blob)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in_temp_dir() -> (JsonFileStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("snapshot.json"));
        (store, dir)
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let (store, _dir) = store_in_temp_dir();
        assert!(store.path().ends_with("snapshot.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (store, _dir) = store_in_temp_dir();
        store.save("{\"user\":null}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{\"user\":null}"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (store, _dir) = store_in_temp_dir();
        store.save("{}").unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
