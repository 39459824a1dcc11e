//! Ranking strategies for the two independent consumers: the search/sort
//! gallery and the market leaderboard tabs.
//!
//! Every comparator orders by descending score and relies on the stability
//! of `sort_by` so equal scores keep their original relative order across
//! re-renders. Scores are finite by the normalizer guarantee, which makes
//! `f64::total_cmp` a plain descending order here.

use std::str::FromStr;

use crate::domain::Artwork;

use super::valuation::{growth_score, trend, value};

/// Trend multiplier in the trending score; momentum is weighted an order of
/// magnitude above raw value movement.
const TRENDING_TREND_WEIGHT: f64 = 4.0;
const TRENDING_LIKE_WEIGHT: f64 = 0.1;
const POPULAR_LIKE_WEIGHT: f64 = 1.2;
const POPULAR_VIEW_WEIGHT: f64 = 0.08;
/// Offer count is a market-depth proxy and outweighs raw views by far.
const POPULAR_OFFER_WEIGHT: f64 = 6.0;

/// Sort order of the gallery view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GallerySort {
    /// Mix of value, momentum and likes (the gallery default).
    #[default]
    Trending,
    ValueDesc,
    LikesDesc,
    ViewsDesc,
}

impl FromStr for GallerySort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trending" => Ok(GallerySort::Trending),
            "value_desc" => Ok(GallerySort::ValueDesc),
            "likes_desc" => Ok(GallerySort::LikesDesc),
            "views_desc" => Ok(GallerySort::ViewsDesc),
            _ => Err(()),
        }
    }
}

/// Tab of the market leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketTab {
    /// Mix of likes, views and market depth (the market default).
    #[default]
    Popular,
    Gainers,
    Views,
}

impl FromStr for MarketTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "popular" => Ok(MarketTab::Popular),
            "gainers" => Ok(MarketTab::Gainers),
            "views" => Ok(MarketTab::Views),
            _ => Err(()),
        }
    }
}

fn trending_score(art: &Artwork) -> f64 {
    value(art) + trend(art) * TRENDING_TREND_WEIGHT + art.likes as f64 * TRENDING_LIKE_WEIGHT
}

fn popular_score(art: &Artwork) -> f64 {
    art.likes as f64 * POPULAR_LIKE_WEIGHT
        + art.views as f64 * POPULAR_VIEW_WEIGHT
        + art.offer_count() as f64 * POPULAR_OFFER_WEIGHT
}

/// Gallery listing: filter, then sort.
///
/// The query is a case-insensitive substring match over title and artist and
/// is applied before sorting, so filtering never affects the ranking math.
pub fn gallery<'a>(artworks: &'a [Artwork], query: &str, sort: GallerySort) -> Vec<&'a Artwork> {
    let q = query.trim().to_lowercase();
    let mut list: Vec<&Artwork> = artworks
        .iter()
        .filter(|a| {
            q.is_empty()
                || a.title.to_lowercase().contains(&q)
                || a.artist.to_lowercase().contains(&q)
        })
        .collect();

    match sort {
        GallerySort::Trending => {
            list.sort_by(|a, b| trending_score(b).total_cmp(&trending_score(a)))
        }
        GallerySort::ValueDesc => list.sort_by(|a, b| value(b).total_cmp(&value(a))),
        GallerySort::LikesDesc => list.sort_by(|a, b| b.likes.cmp(&a.likes)),
        GallerySort::ViewsDesc => list.sort_by(|a, b| b.views.cmp(&a.views)),
    }

    list
}

/// Market leaderboard: sort, then keep the top of the board.
pub fn market<'a>(artworks: &'a [Artwork], tab: MarketTab, top_n: usize) -> Vec<&'a Artwork> {
    let mut list: Vec<&Artwork> = artworks.iter().collect();

    match tab {
        MarketTab::Popular => list.sort_by(|a, b| popular_score(b).total_cmp(&popular_score(a))),
        MarketTab::Gainers => list.sort_by(|a, b| growth_score(b).total_cmp(&growth_score(a))),
        MarketTab::Views => list.sort_by(|a, b| b.views.cmp(&a.views)),
    }

    list.truncate(top_n);
    list
}

/// Aggregate figures across the whole collection, feeding the overview
/// panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSummary {
    pub artworks: usize,
    /// Sum of current values.
    pub volume: f64,
    /// Sum of likes, views and offer counts.
    pub interactions: u64,
}

pub fn summary(artworks: &[Artwork]) -> MarketSummary {
    let mut volume = 0.0;
    let mut interactions = 0u64;
    for art in artworks {
        volume += value(art);
        interactions += art.likes + art.views + art.offer_count() as u64;
    }
    MarketSummary {
        artworks: artworks.len(),
        volume,
        interactions,
    }
}
