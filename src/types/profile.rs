//! Profile read-model: a user record joined with their sightings.

use serde::{Deserialize, Serialize};

use super::sighting::Sighting;
use crate::stats::SightingStats;

/// Display name used when the user record carries none.
pub const DEFAULT_DISPLAY_NAME: &str = "Wildlife Observer";

/// Bio used when the user record carries none.
pub const DEFAULT_BIO: &str = "No bio yet. Add a description in settings!";

/// A user record as delivered by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    /// Lifetime totals maintained by the backend. When absent they are
    /// recomputed from the supplied sightings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_animals_logged: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_species_count: Option<usize>,
}

/// Headline numbers for the profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStatistics {
    pub total_sightings: usize,
    pub unique_species: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_species: Option<String>,
    pub favorite_species_count: usize,
}

/// Everything the profile page renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub display_name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub statistics: ProfileStatistics,
    pub recent_sightings: Vec<Sighting>,
}

impl ProfileSummary {
    /// Join a user record with their sightings. Backend-maintained totals
    /// win over recomputation when present; the favorite species is always
    /// recomputed since the backend does not track it.
    pub fn assemble(user: &UserRecord, sightings: &[Sighting]) -> Self {
        let computed = SightingStats::collect(sightings);
        let (favorite_species, favorite_species_count) = match computed.most_spotted {
            Some(best) => (Some(best.species), best.count),
            None => (None, 0),
        };

        Self {
            display_name: user
                .display_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
            bio: user
                .bio
                .clone()
                .filter(|bio| !bio.is_empty())
                .unwrap_or_else(|| DEFAULT_BIO.to_string()),
            avatar: user.profile_picture_url.clone(),
            statistics: ProfileStatistics {
                total_sightings: user.total_animals_logged.unwrap_or(computed.total),
                unique_species: user.unique_species_count.unwrap_or(computed.unique_species),
                favorite_species,
                favorite_species_count,
            },
            recent_sightings: sightings.to_vec(),
        }
    }
}
