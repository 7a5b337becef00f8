//! Substring search over the sighting collection, plus suggestion
//! derivation.
//!
//! The contract is deliberately simple: a trimmed, case-folded query
//! matches a record when any of species, location, description, or
//! observer name contains it. Absent fields match as empty strings, an
//! empty query leaves the collection unfiltered, and nothing here ever
//! fails: degenerate inputs all have defined outputs.

use std::time::Instant;

use super::SightingSession;
use crate::Result;
use crate::constants::SUGGESTION_SAMPLE;
use crate::store::LocalStore;
use crate::text::fold;
use crate::types::{SearchOutcome, Sighting, Suggestions};

/// The subset of `sightings` matching `query`: case-insensitive substring
/// over species, location, description, and observer display name, any one
/// field sufficing. An empty (or all-whitespace) query returns the full
/// collection unfiltered; callers should special-case that before asking,
/// since an empty substring matches everything trivially.
pub fn filter_sightings(query: &str, sightings: &[Sighting]) -> Vec<Sighting> {
    let needle = fold(query);
    if needle.is_empty() {
        return sightings.to_vec();
    }

    sightings
        .iter()
        .filter(|sighting| {
            field_contains(sighting.species.as_deref(), &needle)
                || field_contains(sighting.location.as_deref(), &needle)
                || field_contains(sighting.description.as_deref(), &needle)
                || field_contains(sighting.display_name.as_deref(), &needle)
        })
        .cloned()
        .collect()
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|text| fold(text).contains(needle))
}

/// Suggestion labels for a result set: the species and location values of
/// the first [`SUGGESTION_SAMPLE`] records, deduplicated in insertion
/// order. An empty result set yields the distinct no-matches state so the
/// view can render its placeholder row.
pub fn suggestions_for(query: &str, results: &[Sighting]) -> Suggestions {
    if results.is_empty() {
        tracing::debug!(query, "no results to suggest from");
        return Suggestions::NoMatches;
    }

    let mut labels: Vec<String> = Vec::new();
    for sighting in results.iter().take(SUGGESTION_SAMPLE) {
        for value in [sighting.species.as_deref(), sighting.location.as_deref()] {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                if !labels.iter().any(|existing| existing == value) {
                    labels.push(value.to_string());
                }
            }
        }
    }
    Suggestions::Items(labels)
}

impl<S: LocalStore> SightingSession<S> {
    /// Per-keystroke search: narrows the visible set and derives
    /// suggestions, but never touches the history. An empty query restores
    /// the unfiltered view.
    pub fn type_ahead(&mut self, query: &str) -> SearchOutcome {
        self.apply(query)
    }

    /// Explicit submission (Enter or a suggestion click): narrows the view
    /// and records the query in the history. Empty submissions behave like
    /// [`type_ahead`](Self::type_ahead) and leave the history alone.
    pub fn submit_search(&mut self, query: &str) -> Result<SearchOutcome> {
        let outcome = self.apply(query);
        if !outcome.query.is_empty() {
            self.history.add(&outcome.query, &mut self.store)?;
        }
        Ok(outcome)
    }

    /// Restore the unfiltered view.
    pub fn clear_search(&mut self) {
        self.active_query = None;
        self.filtered = self.all.clone();
    }

    fn apply(&mut self, query: &str) -> SearchOutcome {
        let started = Instant::now();
        let trimmed = query.trim();

        self.filtered = filter_sightings(trimmed, &self.all);
        let suggestions = if trimmed.is_empty() {
            self.active_query = None;
            None
        } else {
            self.active_query = Some(trimmed.to_string());
            Some(suggestions_for(trimmed, &self.filtered))
        };

        tracing::debug!(
            query = trimmed,
            hits = self.filtered.len(),
            "search applied"
        );

        SearchOutcome {
            query: trimmed.to_string(),
            elapsed_ms: started.elapsed().as_millis(),
            total: self.filtered.len(),
            hits: self.filtered.clone(),
            suggestions,
        }
    }
}
