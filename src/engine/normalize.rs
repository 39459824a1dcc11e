//! Snapshot normalization: the only path from untrusted data to typed state.
//!
//! Persisted blobs can be hand-edited, written by an older schema, or plain
//! wrong. Everything loaded from the store (and the seed dataset itself)
//! passes through here; past this boundary there is no NaN or non-finite
//! number, no missing collection, and no empty history.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde_json::Value;

use crate::config::Config;
use crate::domain::{
    ActivityEntry, ActivityKind, Artwork, ArtworkId, BoundedLog, Snapshot, User, Username,
};

/// Fallback floor value for artworks that lost their `base`.
const DEFAULT_BASE: f64 = 10.0;

/// Turns raw snapshot values into well-typed session state.
///
/// Normalization never fails: every field either coerces or falls back to a
/// documented default. The only side effects are `tracing` diagnostics for
/// entries that had to be dropped.
#[derive(Debug, Clone)]
pub struct Normalizer {
    history_capacity: usize,
    activity_capacity: usize,
}

impl Normalizer {
    pub fn new(config: &Config) -> Self {
        Normalizer {
            history_capacity: config.history_capacity,
            activity_capacity: config.activity_capacity,
        }
    }

    pub fn normalize(&self, raw: &Value) -> Snapshot {
        let user = self.normalize_user(raw.get("user"));
        let artworks = match raw.get("artworks").and_then(Value::as_array) {
            Some(entries) => entries
                .iter()
                .filter_map(|entry| self.normalize_artwork(entry))
                .collect(),
            None => Vec::new(),
        };
        Snapshot { user, artworks }
    }

    fn normalize_user(&self, raw: Option<&Value>) -> User {
        let mut user = User::anonymous(self.activity_capacity);
        let raw = match raw.and_then(Value::as_object) {
            Some(map) => map,
            None => return user,
        };

        if let Some(name) = raw.get("username").and_then(Value::as_str) {
            match Username::parse(name) {
                Ok(parsed) => user.username = Some(parsed),
                Err(_) => tracing::warn!(username = name, "dropping invalid stored username"),
            }
        }

        user.balance = coerce_f64(raw.get("balance"), 0.0).max(0.0);
        user.followed = coerce_followed(raw.get("followed"));
        user.likes = coerce_likes(raw.get("likes"));
        user.activity = self.coerce_activity(raw.get("activity"));
        user
    }

    fn normalize_artwork(&self, raw: &Value) -> Option<Artwork> {
        let id = match raw.get("id").and_then(Value::as_str) {
            Some(id) if !id.trim().is_empty() => ArtworkId::new(id),
            _ => {
                tracing::warn!("dropping artwork entry without a usable id");
                return None;
            }
        };

        let base = coerce_f64(raw.get("base"), DEFAULT_BASE).max(0.0);
        let history = self.coerce_history(raw.get("history"), base);

        Some(Artwork {
            id,
            title: coerce_string(raw.get("title")),
            artist: coerce_string(raw.get("artist")),
            // older blobs used the short field names
            description: coerce_string(raw.get("description").or_else(|| raw.get("desc"))),
            image_ref: coerce_string(raw.get("image_ref").or_else(|| raw.get("img"))),
            base,
            likes: coerce_count(raw.get("likes")),
            views: coerce_count(raw.get("views")),
            offers: coerce_offers(raw.get("offers")),
            history,
        })
    }

    fn coerce_history(&self, raw: Option<&Value>, base: f64) -> BoundedLog<f64> {
        let points: Vec<f64> = match raw.and_then(Value::as_array) {
            Some(entries) => entries
                .iter()
                .filter_map(|v| coerce_finite(Some(v)))
                .collect(),
            None => Vec::new(),
        };
        if points.is_empty() {
            // the history invariant: never empty, seeded with the base value
            return BoundedLog::from_entries(self.history_capacity, [base]);
        }
        BoundedLog::from_entries(self.history_capacity, points)
    }

    fn coerce_activity(&self, raw: Option<&Value>) -> BoundedLog<ActivityEntry> {
        let mut log = BoundedLog::new(self.activity_capacity);
        let entries = match raw.and_then(Value::as_array) {
            Some(entries) => entries,
            None => return log,
        };
        for entry in entries {
            let kind = entry
                .get("kind")
                .or_else(|| entry.get("type"))
                .and_then(Value::as_str)
                .and_then(|tag| ActivityKind::from_str(tag).ok());
            let kind = match kind {
                Some(kind) => kind,
                None => continue,
            };
            log.push(ActivityEntry {
                at: coerce_string(entry.get("at")),
                kind,
                detail: coerce_string(entry.get("detail")),
            });
        }
        log
    }
}

/// Lenient numeric parse: JSON numbers and numeric strings both count,
/// anything non-finite becomes the fallback.
fn coerce_f64(raw: Option<&Value>, fallback: f64) -> f64 {
    coerce_finite(raw).unwrap_or(fallback)
}

fn coerce_finite(raw: Option<&Value>) -> Option<f64> {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|x| x.is_finite())
}

/// Counters: finite, clamped at zero, floor-truncated.
fn coerce_count(raw: Option<&Value>) -> u64 {
    coerce_f64(raw, 0.0).max(0.0).floor() as u64
}

/// Offers: negative or non-finite entries clamp to 0, fractions truncate.
fn coerce_offers(raw: Option<&Value>) -> Vec<u64> {
    match raw.and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .map(|v| coerce_f64(Some(v), 0.0).max(0.0).floor() as u64)
            .collect(),
        None => Vec::new(),
    }
}

fn coerce_string(raw: Option<&Value>) -> String {
    raw.and_then(Value::as_str).unwrap_or_default().to_string()
}

fn coerce_followed(raw: Option<&Value>) -> Vec<ArtworkId> {
    let mut seen = BTreeSet::new();
    match raw.and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(ArtworkId::new)
            .filter(|id| seen.insert(id.clone()))
            .collect(),
        None => Vec::new(),
    }
}

/// Like markers: the current shape is an array of ids, older blobs stored an
/// id-to-bool object.
fn coerce_likes(raw: Option<&Value>) -> BTreeSet<ArtworkId> {
    match raw {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(ArtworkId::new)
            .collect(),
        Some(Value::Object(map)) => map
            .iter()
            .filter(|(_, marked)| marked.as_bool() == Some(true))
            .map(|(id, _)| ArtworkId::new(id.clone()))
            .collect(),
        _ => BTreeSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::valuation::value;
    use serde_json::json;

    fn normalizer() -> Normalizer {
        Normalizer::new(&Config::default())
    }

    #[test]
    fn test_empty_value_yields_anonymous_empty_state() {
        let snapshot = normalizer().normalize(&json!({}));
        assert!(snapshot.user.username.is_none());
        assert_eq!(snapshot.user.balance, 0.0);
        assert!(snapshot.artworks.is_empty());
    }

    #[test]
    fn test_artwork_without_id_is_dropped() {
        let snapshot = normalizer().normalize(&json!({
            "artworks": [
                { "title": "No Id" },
                { "id": "  ", "title": "Blank Id" },
                { "id": "mm-001", "title": "Kept" },
            ]
        }));
        assert_eq!(snapshot.artworks.len(), 1);
        assert_eq!(snapshot.artworks[0].id.as_str(), "mm-001");
    }

    #[test]
    fn test_numeric_coercion_with_fallbacks() {
        let snapshot = normalizer().normalize(&json!({
            "artworks": [{
                "id": "mm-001",
                "base": "not a number",
                "likes": "41.9",
                "views": -12,
                "offers": [10, -3, "7.8", "NaN", null],
            }]
        }));
        let art = &snapshot.artworks[0];
        assert_eq!(art.base, 10.0);
        assert_eq!(art.likes, 41);
        assert_eq!(art.views, 0);
        assert_eq!(art.offers, vec![10, 0, 7, 0, 0]);
    }

    #[test]
    fn test_missing_history_reseeds_to_base() {
        let snapshot = normalizer().normalize(&json!({
            "artworks": [
                { "id": "mm-001", "base": 25 },
                { "id": "mm-002", "base": 10, "history": ["junk", null] },
            ]
        }));
        assert_eq!(snapshot.artworks[0].history.to_vec(), vec![25.0]);
        assert_eq!(snapshot.artworks[1].history.to_vec(), vec![10.0]);
    }

    #[test]
    fn test_history_bounded_to_capacity_keeping_recent() {
        let long: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let snapshot = normalizer().normalize(&json!({
            "artworks": [{ "id": "mm-001", "history": long }]
        }));
        let history = snapshot.artworks[0].history.to_vec();
        assert_eq!(history.len(), 18);
        assert_eq!(history[0], 12.0);
        assert_eq!(*history.last().unwrap(), 29.0);
    }

    #[test]
    fn test_user_fallbacks_and_balance_coercion() {
        let snapshot = normalizer().normalize(&json!({
            "user": { "username": 42, "balance": "NaN" }
        }));
        assert!(snapshot.user.username.is_none());
        assert_eq!(snapshot.user.balance, 0.0);

        let snapshot = normalizer().normalize(&json!({
            "user": { "username": "collector", "balance": "120.5", "followed": ["a", "b", "a"] }
        }));
        assert_eq!(snapshot.user.username.unwrap().as_str(), "collector");
        assert_eq!(snapshot.user.balance, 120.5);
        assert_eq!(
            snapshot.user.followed,
            vec![ArtworkId::new("a"), ArtworkId::new("b")]
        );
    }

    #[test]
    fn test_negative_balance_clamps_to_zero() {
        let snapshot = normalizer().normalize(&json!({ "user": { "balance": -40 } }));
        assert_eq!(snapshot.user.balance, 0.0);
    }

    #[test]
    fn test_likes_accepts_both_wire_shapes() {
        let from_array = normalizer().normalize(&json!({
            "user": { "likes": ["mm-001", "mm-002"] }
        }));
        assert!(from_array.user.has_liked(&ArtworkId::new("mm-001")));

        let from_object = normalizer().normalize(&json!({
            "user": { "likes": { "mm-001": true, "mm-002": false } }
        }));
        assert!(from_object.user.has_liked(&ArtworkId::new("mm-001")));
        assert!(!from_object.user.has_liked(&ArtworkId::new("mm-002")));
    }

    #[test]
    fn test_activity_skips_unknown_kinds_and_bounds_window() {
        let entries: Vec<Value> = (0..25)
            .map(|i| json!({ "at": "01/01 10:00", "kind": "LIKE", "detail": format!("entry {}", i) }))
            .chain([json!({ "at": "x", "kind": "REPAINT", "detail": "bogus" })])
            .collect();
        let snapshot = normalizer().normalize(&json!({ "user": { "activity": entries } }));
        assert_eq!(snapshot.user.activity.len(), 20);
        assert_eq!(
            snapshot.user.activity.latest().unwrap().detail,
            "entry 24"
        );
    }

    #[test]
    fn test_legacy_field_names_still_read() {
        let snapshot = normalizer().normalize(&json!({
            "artworks": [{
                "id": "mm-001",
                "desc": "short name era",
                "img": "https://example.test/a.jpg",
            }]
        }));
        let art = &snapshot.artworks[0];
        assert_eq!(art.description, "short name era");
        assert_eq!(art.image_ref, "https://example.test/a.jpg");
    }

    #[test]
    fn test_normalized_value_is_always_finite() {
        let snapshot = normalizer().normalize(&json!({
            "artworks": [{
                "id": "mm-001",
                "base": "Infinity",
                "likes": "1e309",
                "views": "-1e309",
                "offers": ["1e309"],
                "history": ["Infinity", "-Infinity"],
            }]
        }));
        let art = &snapshot.artworks[0];
        assert!(value(art).is_finite());
        assert!(value(art) >= 0.0);
        assert!(!art.history.is_empty());
    }
}
