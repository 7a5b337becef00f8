//! Session state for the sighting views.
//!
//! The map, admin, and report pages share one pool of state: the full
//! sighting collection as last fetched, the subset the active search left
//! visible, and the persisted search history. The browser build kept these
//! as page globals; here they are explicit state owned by a session object
//! that the resolver and search functions operate on by reference. All
//! operations are synchronous; the session is read-then-replaced between
//! UI events and never shared across threads.

pub mod history;
mod lifecycle;
pub mod search;

pub use history::SearchHistory;

use crate::atlas::CampusAtlas;
use crate::store::LocalStore;
use crate::types::Sighting;

/// State behind one user's sighting views.
pub struct SightingSession<S: LocalStore> {
    atlas: CampusAtlas,
    store: S,
    all: Vec<Sighting>,
    filtered: Vec<Sighting>,
    /// Trimmed text of the search currently narrowing the view.
    active_query: Option<String>,
    history: SearchHistory,
}
