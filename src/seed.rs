//! Hardcoded default dataset, used when the store is empty or unreadable.

use serde_json::{json, Value};

/// Raw seed snapshot: six artworks with hand-authored base stats.
///
/// Deliberately a raw value rather than typed records: the seed takes the
/// same normalization path as any persisted blob, so there is exactly one
/// place that constructs typed state.
pub fn default_dataset() -> Value {
    json!({
        "user": {
            "username": null,
            "balance": 0,
            "followed": [],
            "likes": [],
            "activity": []
        },
        "artworks": [
            {
                "id": "mm-001",
                "title": "Busto Femminile // Index",
                "artist": "A. Neri",
                "image_ref": "https://images.unsplash.com/photo-1541963463532-d68292c34b19?auto=format&fit=crop&w=1400&q=80",
                "description": "A classical sculpture re-imagined as a digital asset. Every interaction moves the price like a micro-exchange.",
                "base": 10,
                "likes": 124,
                "views": 6800,
                "offers": [14, 22, 18, 30],
                "history": [10, 11.2, 12.1, 11.9, 12.45, 12.68, 12.45]
            },
            {
                "id": "mm-002",
                "title": "Neon Corridor",
                "artist": "Luna Shard",
                "image_ref": "https://images.unsplash.com/photo-1520975682031-a0a350c0ce4c?auto=format&fit=crop&w=1400&q=80",
                "description": "A synthetic architectural space of light and depth. Value grows with simulated market interest.",
                "base": 10,
                "likes": 88,
                "views": 3900,
                "offers": [9, 12, 16],
                "history": [10, 10.6, 10.9, 11.1, 11.45, 11.62]
            },
            {
                "id": "mm-003",
                "title": "Algorithmic Bloom",
                "artist": "K. Yapa (demo)",
                "image_ref": "https://images.unsplash.com/photo-1526318472351-c75fcf070305?auto=format&fit=crop&w=1400&q=80",
                "description": "A generative pattern fed by market data: a bloom reacting to user behavior.",
                "base": 10,
                "likes": 156,
                "views": 9100,
                "offers": [20, 26, 33, 17, 24],
                "history": [10, 11.0, 11.6, 12.4, 13.2, 13.9, 14.4]
            },
            {
                "id": "mm-004",
                "title": "Blue Signal (NFT-less)",
                "artist": "M. Riva",
                "image_ref": "https://images.unsplash.com/photo-1550684376-efcbd6e3f031?auto=format&fit=crop&w=1400&q=80",
                "description": "Digital art without the crypto hype: reputation and demand set the value trajectory.",
                "base": 10,
                "likes": 62,
                "views": 2500,
                "offers": [8, 10],
                "history": [10, 10.2, 10.3, 10.55, 10.7]
            },
            {
                "id": "mm-005",
                "title": "Quantum Portrait",
                "artist": "E. Satori",
                "image_ref": "https://images.unsplash.com/photo-1520975958225-7f61a1b8b1b8?auto=format&fit=crop&w=1400&q=80",
                "description": "A digital portrait: identity as a market variable. Value follows interactions.",
                "base": 10,
                "likes": 44,
                "views": 1200,
                "offers": [6, 7, 11],
                "history": [10, 10.15, 10.28, 10.44, 10.62]
            },
            {
                "id": "mm-006",
                "title": "Black Gallery / Void",
                "artist": "Studio Meta",
                "image_ref": "https://images.unsplash.com/photo-1518998053901-5348d3961a04?auto=format&fit=crop&w=1400&q=80",
                "description": "An immersive museum environment where the room itself is the work. Trend and growth follow simulated demand.",
                "base": 10,
                "likes": 112,
                "views": 5400,
                "offers": [12, 18, 19],
                "history": [10, 10.9, 11.2, 11.75, 12.0, 12.12]
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::Normalizer;

    #[test]
    fn test_seed_normalizes_to_six_artworks() {
        let snapshot = Normalizer::new(&Config::default()).normalize(&default_dataset());
        assert_eq!(snapshot.artworks.len(), 6);
        assert!(snapshot.user.username.is_none());
        for art in &snapshot.artworks {
            assert!(!art.history.is_empty());
            assert!(art.base >= 0.0);
        }
    }
}
