pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod seed;
pub mod session;
pub mod store;

pub use config::Config;
pub use domain::{
    ActivityEntry, ActivityKind, Artwork, ArtworkId, BoundedLog, Snapshot, User, Username,
};
pub use engine::{GallerySort, MarketSummary, MarketTab, Normalizer};
pub use error::{EngineError, PreconditionError, ValidationError};
pub use session::{FollowChange, Session};
pub use store::{JsonFileStore, MemoryStore, SnapshotStore, StoreError};
