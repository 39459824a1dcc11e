//! Valuation math: pure, idempotent functions over live counters.
//!
//! Nothing here is memoized; every call recomputes from the artwork's
//! current state so consumers always read a live figure.

use crate::domain::Artwork;

/// Value added per like.
const LIKE_WEIGHT: f64 = 0.45;
/// Value added per view.
const VIEW_WEIGHT: f64 = 0.02;
/// Dampening factor applied to the square root of each offer.
const OFFER_WEIGHT: f64 = 0.9;
/// Markup applied to the best offer when pre-filling a bid.
const SUGGESTION_MARKUP: f64 = 1.08;
/// Fraction of the value used to pre-fill a bid on an empty book.
const SUGGESTION_VALUE_FRACTION: f64 = 0.25;

/// Round to 2 decimals, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Aggregate demand signal from the offer book.
///
/// Each offer contributes its square root, so a single large bid raises the
/// value without dominating it.
pub fn offer_impact(offers: &[u64]) -> f64 {
    offers.iter().map(|&o| (o as f64).sqrt() * OFFER_WEIGHT).sum()
}

/// Current market value of an artwork.
pub fn value(art: &Artwork) -> f64 {
    round2(
        art.base
            + art.likes as f64 * LIKE_WEIGHT
            + art.views as f64 * VIEW_WEIGHT
            + offer_impact(&art.offers),
    )
}

/// Tick-over-tick delta of the value history; 0 below two points.
///
/// Non-negative reads as "up".
pub fn trend(art: &Artwork) -> f64 {
    match (art.history.latest(), art.history.second_latest()) {
        (Some(last), Some(prev)) => round2(last - prev),
        _ => 0.0,
    }
}

/// Growth across the retained history window plus double-weighted momentum.
pub fn growth_score(art: &Artwork) -> f64 {
    match (art.history.latest(), art.history.first()) {
        (Some(last), Some(first)) if art.history.len() >= 2 => (last - first) + trend(art) * 2.0,
        _ => 0.0,
    }
}

/// Advisory bid pre-fill: 8% above the best offer, or a quarter of the value
/// on an empty book. Never used to validate or clamp an actual offer.
pub fn suggest_offer(art: &Artwork) -> u64 {
    let suggested = match art.max_offer() {
        Some(top) => (top as f64 * SUGGESTION_MARKUP).floor(),
        None => (value(art) * SUGGESTION_VALUE_FRACTION).floor(),
    };
    (suggested as u64).max(1)
}
