//! Snapshot persistence boundary: an opaque blob store behind a small trait.

use thiserror::Error;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Persistence interface for the serialized session snapshot.
///
/// Implementations are synchronous; the session sequences a save after every
/// mutating operation and treats a failure as a non-fatal warning, keeping
/// the in-memory state authoritative.
pub trait SnapshotStore {
    /// Fetch the stored blob, or `None` when nothing was persisted yet.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored blob with a full snapshot serialization.
    fn save(&self, blob: &str) -> Result<(), StoreError>;

    /// Drop the stored blob entirely.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
