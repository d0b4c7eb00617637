//! History store seam.
//!
//! The real store is the backend's append-only `locations` table; the engine
//! only needs ordered reads. The in-memory implementation here backs tests
//! and offline tooling.

use crate::identifiers::{GameIdentifier, PlayerIdentifier};
use crate::models::types::{LocationEntry, Result};

/// Append-only persistence for location history, keyed by (subject, game)
pub trait HistoryStore: Send + Sync {
    /// Record one entry. A failed append must leave the store unchanged.
    fn append(&mut self, entry: LocationEntry) -> Result<()>;

    /// Entries for a subject (optionally scoped to a game), ordered by
    /// timestamp ascending
    fn query(
        &self,
        subject: &PlayerIdentifier,
        game: Option<&GameIdentifier>,
    ) -> Vec<LocationEntry>;
}

/// In-memory history, kept sorted by timestamp on insert so out-of-order
/// fixes from a flaky location source still read back ordered.
#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: Vec<LocationEntry>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&mut self, entry: LocationEntry) -> Result<()> {
        let at = self
            .entries
            .partition_point(|e| e.fix.timestamp <= entry.fix.timestamp);
        self.entries.insert(at, entry);
        Ok(())
    }

    fn query(
        &self,
        subject: &PlayerIdentifier,
        game: Option<&GameIdentifier>,
    ) -> Vec<LocationEntry> {
        self.entries
            .iter()
            .filter(|e| &e.subject_id == subject)
            .filter(|e| match game {
                Some(g) => e.game_id.as_ref() == Some(g),
                None => true,
            })
            .cloned()
            .collect()
    }
}
