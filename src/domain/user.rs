//! User record: identity, balance, follows, like markers, activity trail.

use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::domain::{ArtworkId, BoundedLog, Username};

/// Kind tag of an audit-trail entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityKind {
    Login,
    Like,
    Follow,
    Unfollow,
    Offer,
}

impl FromStr for ActivityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOGIN" => Ok(ActivityKind::Login),
            "LIKE" => Ok(ActivityKind::Like),
            "FOLLOW" => Ok(ActivityKind::Follow),
            "UNFOLLOW" => Ok(ActivityKind::Unfollow),
            "OFFER" => Ok(ActivityKind::Offer),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ActivityKind::Login => "LOGIN",
            ActivityKind::Like => "LIKE",
            ActivityKind::Follow => "FOLLOW",
            ActivityKind::Unfollow => "UNFOLLOW",
            ActivityKind::Offer => "OFFER",
        };
        write!(f, "{}", tag)
    }
}

/// One audit-trail entry: a local timestamp tag, a kind and a human-readable
/// detail line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub at: String,
    pub kind: ActivityKind,
    pub detail: String,
}

/// The session's single user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// `None` means anonymous.
    pub username: Option<Username>,
    /// Non-negative credit balance.
    pub balance: f64,
    /// Followed artwork ids in insertion order, no duplicates.
    pub followed: Vec<ArtworkId>,
    /// "Already liked" markers, at most one like per artwork.
    pub likes: BTreeSet<ArtworkId>,
    /// Most recent audit entries, bounded FIFO window.
    pub activity: BoundedLog<ActivityEntry>,
}

impl User {
    /// Fresh anonymous user with an empty activity window.
    pub fn anonymous(activity_capacity: usize) -> Self {
        User {
            username: None,
            balance: 0.0,
            followed: Vec::new(),
            likes: BTreeSet::new(),
            activity: BoundedLog::new(activity_capacity),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn has_liked(&self, id: &ArtworkId) -> bool {
        self.likes.contains(id)
    }

    pub fn is_following(&self, id: &ArtworkId) -> bool {
        self.followed.iter().any(|f| f == id)
    }
}
