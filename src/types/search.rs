//! Search results, suggestions, and history rows handed to the view layer.

use serde::{Deserialize, Serialize};

use super::sighting::Sighting;

/// Result of one search pass over the sighting collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Query echoed back for the view, as submitted (trimmed, original case).
    pub query: String,
    /// Milliseconds spent filtering.
    pub elapsed_ms: u128,
    /// Total matching records.
    pub total: usize,
    /// The matching subset, in collection order.
    pub hits: Vec<Sighting>,
    /// Suggestion labels for the dropdown; `None` for an empty query, where
    /// the view shows the history instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Suggestions>,
}

/// Suggestion labels derived from a result set. An empty result set is a
/// distinct state, not an empty list: the view renders a "no results" row
/// for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestions {
    NoMatches,
    Items(Vec<String>),
}

impl Suggestions {
    /// Labels to render, empty for [`Suggestions::NoMatches`].
    pub fn labels(&self) -> &[String] {
        match self {
            Self::NoMatches => &[],
            Self::Items(items) => items,
        }
    }

    pub fn has_matches(&self) -> bool {
        matches!(self, Self::Items(_))
    }
}

/// Which list a history row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryOrigin {
    /// A past submission, most recent first. Removable.
    Recent,
    /// A static recommended query. Never persisted.
    Recommended,
}

/// One row of the search-history dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub label: String,
    pub origin: HistoryOrigin,
}
