//! Read-only aggregation over a sighting collection.
//!
//! Everything here recomputes from scratch on each call; there is no cached
//! state to invalidate. Collections are small (a campus worth of sightings)
//! so the tallies stay linear scans over a Vec rather than reaching for a
//! keyed map that would lose encounter order.

use serde::{Deserialize, Serialize};

use crate::types::Sighting;

/// Occurrence count for one species value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCount {
    pub species: String,
    pub count: usize,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SightingStats {
    /// Total records.
    pub total: usize,
    /// Distinct non-empty species values.
    pub unique_species: usize,
    /// Species with the highest occurrence count. On equal counts the
    /// species encountered first in the collection wins and is not
    /// displaced by a later species reaching the same count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_spotted: Option<SpeciesCount>,
}

impl SightingStats {
    pub fn collect(sightings: &[Sighting]) -> Self {
        let counts = species_counts(sightings);

        let mut most_spotted: Option<SpeciesCount> = None;
        for entry in &counts {
            let displaces = most_spotted
                .as_ref()
                .is_none_or(|best| entry.count > best.count);
            if displaces {
                most_spotted = Some(entry.clone());
            }
        }

        Self {
            total: sightings.len(),
            unique_species: counts.len(),
            most_spotted,
        }
    }
}

/// Species ranked by count descending, ties kept in first-encountered
/// order, truncated to `limit`.
pub fn top_species(sightings: &[Sighting], limit: usize) -> Vec<SpeciesCount> {
    let mut counts = species_counts(sightings);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Per-species counts in first-encountered order, with records that carry
/// no species grouped under a placeholder bucket. This is the profile
/// page's species list, so absent values are shown rather than dropped.
pub fn species_tally(sightings: &[Sighting]) -> Vec<SpeciesCount> {
    let mut tally: Vec<SpeciesCount> = Vec::new();
    for sighting in sightings {
        let species = sighting
            .species
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown Species");
        bump(&mut tally, species);
    }
    tally
}

/// The subset of sightings carrying an image reference, in supplied order.
pub fn photo_gallery(sightings: &[Sighting]) -> Vec<&Sighting> {
    sightings.iter().filter(|s| s.has_image()).collect()
}

/// Counts over non-empty species values only, first-encountered order.
fn species_counts(sightings: &[Sighting]) -> Vec<SpeciesCount> {
    let mut counts: Vec<SpeciesCount> = Vec::new();
    for sighting in sightings {
        if let Some(species) = sighting.species.as_deref().filter(|s| !s.is_empty()) {
            bump(&mut counts, species);
        }
    }
    counts
}

fn bump(counts: &mut Vec<SpeciesCount>, species: &str) {
    if let Some(entry) = counts.iter_mut().find(|entry| entry.species == species) {
        entry.count += 1;
    } else {
        counts.push(SpeciesCount {
            species: species.to_string(),
            count: 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sighting(species: Option<&str>) -> Sighting {
        Sighting {
            species: species.map(str::to_string),
            ..Sighting::default()
        }
    }

    fn from_species(names: &[Option<&str>]) -> Vec<Sighting> {
        names.iter().map(|s| sighting(*s)).collect()
    }

    #[test]
    fn collect_counts_and_distinct_species() {
        let sightings = from_species(&[
            Some("Squirrel"),
            Some("Crow"),
            Some("Squirrel"),
            None,
            Some(""),
        ]);
        let stats = SightingStats::collect(&sightings);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.unique_species, 2);
    }

    #[test]
    fn most_spotted_first_to_max_wins() {
        let sightings = from_species(&[
            Some("Squirrel"),
            Some("Crow"),
            Some("Squirrel"),
            Some("Crow"),
            Some("Squirrel"),
            Some("Crow"),
        ]);
        let stats = SightingStats::collect(&sightings);
        let best = stats.most_spotted.unwrap();
        assert_eq!(best.species, "Squirrel");
        assert_eq!(best.count, 3);
    }

    #[test]
    fn empty_collection_has_no_most_spotted() {
        let stats = SightingStats::collect(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.most_spotted.is_none());
    }

    #[test]
    fn top_species_ranks_with_stable_ties() {
        let sightings = from_species(&[
            Some("Hawk"),
            Some("Coyote"),
            Some("Coyote"),
            Some("Raccoon"),
            Some("Hawk"),
            Some("Opossum"),
        ]);
        let top = top_species(&sightings, 3);
        assert_eq!(top.len(), 3);
        // Coyote and Hawk both reach 2; Hawk was encountered first.
        assert_eq!(top[0].species, "Hawk");
        assert_eq!(top[1].species, "Coyote");
        assert_eq!(top[2].species, "Raccoon");
    }

    #[test]
    fn tally_buckets_missing_species() {
        let sightings = from_species(&[Some("Owl"), None, Some("Owl"), Some("")]);
        let tally = species_tally(&sightings);
        assert_eq!(
            tally,
            vec![
                SpeciesCount { species: "Owl".to_string(), count: 2 },
                SpeciesCount { species: "Unknown Species".to_string(), count: 2 },
            ]
        );
    }

    #[test]
    fn gallery_keeps_only_records_with_images() {
        let mut with_image = sighting(Some("Heron"));
        with_image.image_url = Some("/uploads/heron.jpg".to_string());
        let sightings = vec![sighting(Some("Crow")), with_image];
        let gallery = photo_gallery(&sightings);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery[0].species.as_deref(), Some("Heron"));
    }
}
