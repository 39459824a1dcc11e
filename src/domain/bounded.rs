//! Fixed-capacity FIFO window shared by value history and the activity log.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::VecDeque;

/// Append-only sliding window over the most recent entries.
///
/// Pushing past capacity evicts the oldest entry permanently. Entries keep
/// their chronological order; there is no index reuse.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedLog<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedLog<T> {
    /// Create an empty window retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        BoundedLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a window from a chronological sequence, keeping the most recent
    /// `capacity` entries.
    pub fn from_entries<I: IntoIterator<Item = T>>(capacity: usize, items: I) -> Self {
        let mut log = Self::new(capacity);
        for item in items {
            log.push(item);
        }
        log
    }

    /// Append an entry, evicting the oldest once past capacity.
    pub fn push(&mut self, item: T) {
        self.entries.push_back(item);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest retained entry.
    pub fn first(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Entry just before the most recent one.
    pub fn second_latest(&self) -> Option<&T> {
        self.entries
            .len()
            .checked_sub(2)
            .and_then(|i| self.entries.get(i))
    }

    /// Chronological iteration, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Reverse iteration, newest first (the activity-view order).
    pub fn recent(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().rev()
    }

    /// Copy the retained entries out in chronological order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.iter().cloned().collect()
    }
}

impl<T: Serialize> Serialize for BoundedLog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}
