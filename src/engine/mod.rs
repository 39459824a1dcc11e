//! Pure computation engine: valuation math, ranking strategies, history
//! ledger and snapshot normalization.

pub mod history;
pub mod normalize;
pub mod ranking;
pub mod valuation;

pub use normalize::Normalizer;
pub use ranking::{GallerySort, MarketSummary, MarketTab};
