//! The sighting record as delivered by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::SightingId;
use super::location::MapPoint;

/// A single reported wildlife observation, already deserialized from the
/// backend's JSON. Every descriptive field is optional; matching and
/// aggregation treat absent text as the empty string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sighting {
    #[serde(default)]
    pub id: SightingId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Display name of the reporting observer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Image reference: an absolute URL, a server-relative path, or a data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Explicit map position picked on the report form, percent units.
    /// When both components are present this takes precedence over any
    /// name-based lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_y: Option<f64>,
}

impl Sighting {
    /// The explicit pixel pair, if the record carries a complete one.
    /// One-sided pairs are treated as absent and fall through to the
    /// label-based lookup.
    pub fn explicit_point(&self) -> Option<MapPoint> {
        match (self.pixel_x, self.pixel_y) {
            (Some(x), Some(y)) => Some(MapPoint::new(x, y)),
            _ => None,
        }
    }

    /// Location label, trimmed; `None` when absent or blank.
    pub fn location_label(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|uri| !uri.is_empty())
    }
}
