//! Session state: one user plus the ordered artwork collection.

use serde::Serialize;

use crate::domain::{Artwork, ArtworkId, User};

/// The whole in-memory state of a session.
///
/// Serializes to the opaque persistence blob. Inbound data never deserializes
/// into this type directly; it goes through the normalizer, which is why the
/// domain types only derive `Serialize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub user: User,
    pub artworks: Vec<Artwork>,
}

impl Snapshot {
    pub fn artwork(&self, id: &ArtworkId) -> Option<&Artwork> {
        self.artworks.iter().find(|a| &a.id == id)
    }

    pub fn artwork_mut(&mut self, id: &ArtworkId) -> Option<&mut Artwork> {
        self.artworks.iter_mut().find(|a| &a.id == id)
    }

    /// Serialize the snapshot for the store.
    pub fn to_blob(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
