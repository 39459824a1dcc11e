//! Transaction operations over the session state.
//!
//! The session is the single owner of the in-memory snapshot: operations run
//! to completion on one thread, validate before touching anything, and end
//! with a persistence request. A failed save is a warning, not an error; the
//! in-memory state stays authoritative for the rest of the process lifetime.

use chrono::Local;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{
    ActivityEntry, ActivityKind, Artwork, ArtworkId, Snapshot, Username, CURRENCY_SYMBOL,
};
use crate::engine::{history, ranking, valuation, GallerySort, MarketSummary, MarketTab, Normalizer};
use crate::error::{EngineError, PreconditionError, ValidationError};
use crate::seed;
use crate::store::SnapshotStore;

/// Outcome of a follow toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowChange {
    Followed,
    Unfollowed,
}

/// A running market session: one user, one artwork collection, one store.
pub struct Session<S: SnapshotStore> {
    store: S,
    config: Config,
    snapshot: Snapshot,
}

impl<S: SnapshotStore> Session<S> {
    /// Open a session from the store, falling back to the seed dataset when
    /// nothing usable is persisted. Either path runs through the normalizer.
    pub fn open(store: S, config: Config) -> Self {
        let raw = load_raw(&store);
        let snapshot = Normalizer::new(&config).normalize(&raw);
        debug!(artworks = snapshot.artworks.len(), "session opened");
        Session {
            store,
            config,
            snapshot,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gallery listing: search filter first, then the selected sort.
    pub fn gallery(&self, query: &str, sort: GallerySort) -> Vec<&Artwork> {
        ranking::gallery(&self.snapshot.artworks, query, sort)
    }

    /// Market leaderboard for a tab, truncated to the board size.
    pub fn market(&self, tab: MarketTab) -> Vec<&Artwork> {
        ranking::market(&self.snapshot.artworks, tab, self.config.market_top_n)
    }

    /// Collection-wide totals for the overview panel.
    pub fn summary(&self) -> MarketSummary {
        ranking::summary(&self.snapshot.artworks)
    }

    /// Advisory bid pre-fill for an artwork.
    pub fn suggest_offer(&self, id: &ArtworkId) -> Result<u64, EngineError> {
        Ok(valuation::suggest_offer(self.artwork(id)?))
    }

    /// Count a view: no precondition, every call is a distinct increment.
    pub fn register_view(&mut self, id: &ArtworkId) -> Result<(), EngineError> {
        let art = self.artwork_mut(id)?;
        art.views += 1;
        history::push_history(art);
        self.persist();
        Ok(())
    }

    /// Like an artwork, at most once per user per artwork.
    pub fn like(&mut self, id: &ArtworkId) -> Result<(), EngineError> {
        self.require_login()?;
        if self.snapshot.user.has_liked(id) {
            return Err(PreconditionError::AlreadyLiked(id.clone()).into());
        }
        let title = {
            let art = self.artwork_mut(id)?;
            art.likes += 1;
            history::push_history(art);
            art.title.clone()
        };
        self.snapshot.user.likes.insert(id.clone());
        self.log_activity(ActivityKind::Like, format!("Liked \"{}\"", title));
        self.persist();
        Ok(())
    }

    /// Follow an artwork, or unfollow when already following.
    ///
    /// Pure user-side bookkeeping: valuation and history stay untouched.
    pub fn toggle_follow(&mut self, id: &ArtworkId) -> Result<FollowChange, EngineError> {
        self.require_login()?;
        let title = self.artwork(id)?.title.clone();

        let followed = &mut self.snapshot.user.followed;
        let change = match followed.iter().position(|f| f == id) {
            Some(pos) => {
                followed.remove(pos);
                FollowChange::Unfollowed
            }
            None => {
                followed.push(id.clone());
                FollowChange::Followed
            }
        };

        match change {
            FollowChange::Followed => {
                self.log_activity(ActivityKind::Follow, format!("Now following \"{}\"", title))
            }
            FollowChange::Unfollowed => self.log_activity(
                ActivityKind::Unfollow,
                format!("Stopped following \"{}\"", title),
            ),
        }
        self.persist();
        Ok(change)
    }

    /// Place a bid: floors the amount, debits the balance, appends to the
    /// offer book. Returns the amount actually debited.
    pub fn place_offer(&mut self, id: &ArtworkId, amount: f64) -> Result<u64, EngineError> {
        self.require_login()?;
        let title = self.artwork(id)?.title.clone();

        if !amount.is_finite() || amount.floor() < 1.0 {
            return Err(ValidationError::NonPositiveOffer.into());
        }
        let offered = amount.floor() as u64;

        let balance = self.snapshot.user.balance;
        if balance < offered as f64 {
            return Err(PreconditionError::InsufficientBalance { offered, balance }.into());
        }

        self.snapshot.user.balance -= offered as f64;
        let art = self.artwork_mut(id)?;
        art.offers.push(offered);
        history::push_history(art);
        self.log_activity(
            ActivityKind::Offer,
            format!("Offered {} {} on \"{}\"", offered, CURRENCY_SYMBOL, title),
        );
        self.persist();
        Ok(offered)
    }

    /// Sign in with a nickname. Grants the starting balance at most once: a
    /// returning user with a positive balance keeps it.
    pub fn login(&mut self, raw_username: &str) -> Result<Username, EngineError> {
        let username = Username::parse(raw_username)?;
        self.snapshot.user.username = Some(username.clone());
        if self.snapshot.user.balance <= 0.0 {
            self.snapshot.user.balance = self.config.login_grant;
        }
        self.log_activity(ActivityKind::Login, format!("Signed in as {}", username));
        self.persist();
        Ok(username)
    }

    /// Sign out: an identity change, not a data reset. Balance, follows,
    /// likes, activity and all artwork data survive.
    pub fn logout(&mut self) -> Option<Username> {
        let previous = self.snapshot.user.username.take();
        if previous.is_some() {
            self.persist();
        }
        previous
    }

    /// Wipe the store and reload the seed dataset.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear store during reset");
        }
        self.snapshot = Normalizer::new(&self.config).normalize(&seed::default_dataset());
    }

    fn require_login(&self) -> Result<(), PreconditionError> {
        if self.snapshot.user.is_logged_in() {
            Ok(())
        } else {
            Err(PreconditionError::LoginRequired)
        }
    }

    fn artwork(&self, id: &ArtworkId) -> Result<&Artwork, PreconditionError> {
        self.snapshot
            .artwork(id)
            .ok_or_else(|| PreconditionError::UnknownArtwork(id.clone()))
    }

    fn artwork_mut(&mut self, id: &ArtworkId) -> Result<&mut Artwork, PreconditionError> {
        self.snapshot
            .artwork_mut(id)
            .ok_or_else(|| PreconditionError::UnknownArtwork(id.clone()))
    }

    fn log_activity(&mut self, kind: ActivityKind, detail: String) {
        // the audit trail belongs to an identity; anonymous actions leave none
        if !self.snapshot.user.is_logged_in() {
            return;
        }
        self.snapshot.user.activity.push(ActivityEntry {
            at: now_tag(),
            kind,
            detail,
        });
    }

    /// Fire the persistence request for the current snapshot.
    ///
    /// Sequenced after the in-memory mutation; a failure is logged and
    /// swallowed, the session keeps running on memory.
    fn persist(&self) {
        let blob = match self.snapshot.to_blob() {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "snapshot serialization failed; skipping save");
                return;
            }
        };
        if let Err(e) = self.store.save(&blob) {
            warn!(error = %e, "snapshot save failed; in-memory state stays authoritative");
        }
    }
}

fn now_tag() -> String {
    Local::now().format("%d/%m %H:%M").to_string()
}

/// Resolve the raw value to normalize: the stored blob when it decodes, the
/// seed dataset otherwise.
fn load_raw<S: SnapshotStore>(store: &S) -> Value {
    let blob = match store.load() {
        Ok(blob) => blob,
        Err(e) => {
            warn!(error = %e, "snapshot load failed; starting from the seed dataset");
            return seed::default_dataset();
        }
    };
    match blob {
        None => seed::default_dataset(),
        Some(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(parsed) => backfill_missing_sections(parsed),
            Err(e) => {
                warn!(error = %e, "stored snapshot is not valid JSON; starting from the seed dataset");
                seed::default_dataset()
            }
        },
    }
}

/// Stale blobs may predate the artwork list; backfill absent sections from
/// the seed so a schema bump never wipes the user record.
fn backfill_missing_sections(parsed: Value) -> Value {
    let mut map = match parsed {
        Value::Object(map) => map,
        _ => {
            warn!("stored snapshot has an unexpected shape; starting from the seed dataset");
            return seed::default_dataset();
        }
    };
    let has_artworks = map.get("artworks").map_or(false, Value::is_array);
    if !has_artworks {
        if let Some(artworks) = seed::default_dataset().get("artworks") {
            map.insert("artworks".to_string(), artworks.clone());
        }
    }
    Value::Object(map)
}
