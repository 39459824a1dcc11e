//! In-memory snapshot store for tests; no filesystem access.

use std::sync::Mutex;

use super::{SnapshotStore, StoreError};

/// Store backed by a mutex-guarded blob.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
    fail_saves: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with a blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        MemoryStore {
            blob: Mutex::new(Some(blob.into())),
            fail_saves: false,
        }
    }

    /// Create a store whose saves always fail, for exercising the
    /// non-fatal persistence-failure path.
    pub fn with_failing_saves() -> Self {
        MemoryStore {
            blob: Mutex::new(None),
            fail_saves: true,
        }
    }

    /// Inspect the currently stored blob.
    pub fn blob(&self) -> Option<String> {
        self.blob.lock().unwrap().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob.lock().unwrap().clone())
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Unavailable("saves disabled".to_string()));
        }
        *self.blob.lock().unwrap() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.blob.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save("{}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{}"));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_failing_saves() {
        let store = MemoryStore::with_failing_saves();
        assert!(store.save("{}").is_err());
        assert!(store.load().unwrap().is_none());
    }
}
