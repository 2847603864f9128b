//! Most-recently-used command history.
//!
//! Entries are kept newest first, never repeat, and never exceed the
//! store's capacity. Every mutation goes through [`HistoryStore::record`],
//! including the seed applied at construction.

use super::models::CommandEntry;
use thiserror::Error;
use tracing::{debug, warn};

pub const MAX_HISTORY: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history entries must not be blank")]
    InvalidEntry,

    #[error("\"{0}\" is not in the history")]
    UnknownEntry(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<CommandEntry>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}

impl HistoryStore {
    /// Creates an empty store. A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a store from a most-recent-first seed.
    ///
    /// The seed is replayed oldest first through [`record`](Self::record),
    /// so duplicates keep their most recent position, blank items are
    /// skipped and the oldest items fall off past the capacity.
    pub fn with_seed<I, S>(capacity: usize, seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: DoubleEndedIterator,
        S: AsRef<str>,
    {
        let mut store = Self::new(capacity);
        for item in seed.into_iter().rev() {
            if store.record(item.as_ref()).is_err() {
                warn!("Skipping blank history seed entry");
            }
        }
        store
    }

    /// Moves `text` to the front, inserting it if it was absent.
    pub fn record(&mut self, text: &str) -> Result<&CommandEntry, HistoryError> {
        let entry = CommandEntry::parse(text).ok_or(HistoryError::InvalidEntry)?;

        if let Some(pos) = self.entries.iter().position(|e| *e == entry) {
            self.entries.remove(pos);
        }
        self.entries.insert(0, entry);

        if self.entries.len() > self.capacity {
            let evicted = self.entries.split_off(self.capacity);
            debug!(evicted = evicted.len(), "History trimmed to capacity");
        }

        Ok(&self.entries[0])
    }

    #[must_use]
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CommandEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e == text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
