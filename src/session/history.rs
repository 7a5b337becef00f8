//! Bounded, deduplicated, recency-ordered search history.
//!
//! Entries keep the query exactly as submitted; deduplication and removal
//! use exact string equality. The list persists as a JSON array under a
//! fixed store key and reloads at session start. Eviction past the
//! capacity is silent.

use super::SightingSession;
use crate::Result;
use crate::constants::{HISTORY_CAPACITY, HISTORY_STORE_KEY, RECOMMENDED_QUERIES};
use crate::store::LocalStore;
use crate::types::{HistoryOrigin, HistoryRow};

/// The persisted search-history list, most recent first.
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    /// Reload the persisted list; an absent key starts empty. A corrupt
    /// payload is an error rather than silently discarded state.
    pub fn load(store: &dyn LocalStore) -> Result<Self> {
        let entries = match store.get(HISTORY_STORE_KEY)? {
            Some(payload) => serde_json::from_str(&payload)?,
            None => Vec::new(),
        };
        Ok(Self { entries })
    }

    /// Record a submission: any existing occurrence of the exact string
    /// moves to the front, and the oldest entry past the capacity is
    /// evicted silently.
    pub fn add(&mut self, query: &str, store: &mut dyn LocalStore) -> Result<()> {
        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist(store)
    }

    /// Remove an entry by exact string equality.
    pub fn remove(&mut self, query: &str, store: &mut dyn LocalStore) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != query);
        if self.entries.len() != before {
            self.persist(store)?;
        }
        Ok(())
    }

    /// Recency entries only, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display rows: the recency list followed by the static recommended
    /// queries. Recommendations are never deduplicated against the history;
    /// a query can appear in both groups.
    pub fn rows(&self) -> Vec<HistoryRow> {
        let mut rows: Vec<HistoryRow> = self
            .entries
            .iter()
            .map(|label| HistoryRow {
                label: label.clone(),
                origin: HistoryOrigin::Recent,
            })
            .collect();
        rows.extend(RECOMMENDED_QUERIES.iter().map(|&label| HistoryRow {
            label: label.to_string(),
            origin: HistoryOrigin::Recommended,
        }));
        rows
    }

    fn persist(&self, store: &mut dyn LocalStore) -> Result<()> {
        let payload = serde_json::to_string(&self.entries)?;
        store.set(HISTORY_STORE_KEY, &payload)
    }
}

impl<S: LocalStore> SightingSession<S> {
    /// Display rows for the history dropdown: recent searches, then the
    /// recommended examples.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        self.history.rows()
    }
}
