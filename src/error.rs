use thiserror::Error;

use crate::domain::ArtworkId;

/// Input rejected before any state was touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("offer amount must be a whole number greater than 0")]
    NonPositiveOffer,
    #[error("username must keep at least 2 characters after sanitization")]
    UsernameTooShort,
}

/// Operation refused because the current session state does not allow it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionError {
    #[error("login required")]
    LoginRequired,
    #[error("already liked artwork {0}")]
    AlreadyLiked(ArtworkId),
    #[error("insufficient balance: offered {offered}, available {balance}")]
    InsufficientBalance { offered: u64, balance: f64 },
    #[error("unknown artwork: {0}")]
    UnknownArtwork(ArtworkId),
}

/// Operation-level error for transaction operations.
///
/// Every variant is locally recoverable and leaves the snapshot untouched;
/// data-integrity problems at the persistence boundary are not errors at all,
/// they are recovered in place and reported as warnings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("precondition failed: {0}")]
    Precondition(#[from] PreconditionError),
}
