//! Domain primitives: ArtworkId, Username, currency tags.

use serde::Serialize;

use crate::error::ValidationError;

/// Display name of the simulated currency.
pub const CURRENCY_NAME: &str = "MuseCredits";

/// Currency symbol used in activity details.
pub const CURRENCY_SYMBOL: &str = "MΞ";

/// Stable artwork identifier (e.g. "mm-001").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ArtworkId(pub String);

impl ArtworkId {
    /// Create an ArtworkId from a string token.
    pub fn new(id: impl Into<String>) -> Self {
        ArtworkId(id.into())
    }

    /// Get the id as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated user nickname.
///
/// Identity is a free-text nickname; the only gate is [`Username::parse`],
/// which strips whitespace, caps the length and rejects names that end up
/// shorter than two characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Username(String);

impl Username {
    /// Minimum length after sanitization.
    pub const MIN_LEN: usize = 2;
    /// Maximum retained length; longer input is truncated, not rejected.
    pub const MAX_LEN: usize = 18;

    /// Sanitize and validate a raw nickname.
    ///
    /// # Errors
    /// Returns `UsernameTooShort` when fewer than two characters survive
    /// whitespace stripping and the length cap.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let stripped: String = raw.split_whitespace().collect();
        let capped: String = stripped.chars().take(Self::MAX_LEN).collect();
        if capped.chars().count() < Self::MIN_LEN {
            return Err(ValidationError::UsernameTooShort);
        }
        Ok(Username(capped))
    }

    /// Get the nickname as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
