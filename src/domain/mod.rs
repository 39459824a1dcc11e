//! Domain types for the art-market simulation.
//!
//! This module provides:
//! - Domain primitives: ArtworkId, Username, currency tags
//! - Artwork and User records with their counters and logs
//! - BoundedLog, the fixed-capacity FIFO window shared by value history and
//!   the activity trail
//! - Snapshot, the single-owner session state persisted as an opaque blob

pub mod artwork;
pub mod bounded;
pub mod primitives;
pub mod snapshot;
pub mod user;

pub use artwork::Artwork;
pub use bounded::BoundedLog;
pub use primitives::{ArtworkId, Username, CURRENCY_NAME, CURRENCY_SYMBOL};
pub use snapshot::Snapshot;
pub use user::{ActivityEntry, ActivityKind, User};
