//! Session construction, collection refresh, and the map/feed read paths.

use rand::Rng;

use super::{SearchHistory, SightingSession};
use crate::Result;
use crate::atlas::CampusAtlas;
use crate::session::search::filter_sightings;
use crate::store::LocalStore;
use crate::types::{Sighting, SightingId, SightingMarker};

impl<S: LocalStore> SightingSession<S> {
    /// Open a session over `store`, reloading the persisted search history.
    pub fn open(store: S) -> Result<Self> {
        let history = SearchHistory::load(&store)?;
        Ok(Self {
            atlas: CampusAtlas::new(),
            store,
            all: Vec::new(),
            filtered: Vec::new(),
            active_query: None,
            history,
        })
    }

    /// Install a freshly fetched collection, re-applying the active search
    /// so a background refresh does not widen a narrowed view.
    pub fn replace_sightings(&mut self, sightings: Vec<Sighting>) {
        self.all = sightings;
        self.filtered = match self.active_query.as_deref() {
            Some(query) => filter_sightings(query, &self.all),
            None => self.all.clone(),
        };
        tracing::debug!(
            total = self.all.len(),
            visible = self.filtered.len(),
            "sighting collection replaced"
        );
    }

    /// Detail lookup by identifier. A miss means the record is not in the
    /// current collection; the caller may fetch it separately.
    pub fn sighting_by_id(&self, id: SightingId) -> Option<&Sighting> {
        self.all.iter().find(|s| s.id == id)
    }

    /// Map markers for the currently visible sightings. Records with
    /// neither a location label nor a complete pixel pair are skipped.
    pub fn markers(&self) -> Vec<SightingMarker> {
        self.markers_with(&mut rand::thread_rng())
    }

    /// As [`markers`](Self::markers), with a caller-supplied randomness
    /// source for the no-match fallback positions.
    pub fn markers_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<SightingMarker> {
        self.filtered
            .iter()
            .filter_map(|sighting| {
                let position = self.atlas.marker_position_with(sighting, rng)?;
                Some(SightingMarker {
                    id: sighting.id,
                    position,
                })
            })
            .collect()
    }

    /// The visible sightings newest-first, truncated to `limit`. Records
    /// without a timestamp sort as oldest.
    pub fn recent_feed(&self, limit: usize) -> Vec<Sighting> {
        let mut feed = self.filtered.clone();
        feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        feed.truncate(limit);
        feed
    }

    /// The full collection as last installed.
    pub fn sightings(&self) -> &[Sighting] {
        &self.all
    }

    /// The subset the active search left visible.
    pub fn visible(&self) -> &[Sighting] {
        &self.filtered
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn atlas(&self) -> &CampusAtlas {
        &self.atlas
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Remove one entry from the search history and persist the change.
    pub fn forget_search(&mut self, query: &str) -> Result<()> {
        self.history.remove(query, &mut self.store)
    }
}
