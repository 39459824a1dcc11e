//! History ledger: the derived log of past valuations.

use crate::domain::Artwork;

use super::valuation;

/// Append the current value to the artwork's history window.
///
/// Runs exactly once per transaction that moves `likes`, `views` or
/// `offers`. Follow and identity changes do not move the valuation and must
/// not append. The window bounds itself; the oldest point falls off once the
/// capacity is reached.
pub fn push_history(art: &mut Artwork) {
    let v = valuation::value(art);
    art.history.push(v);
}
