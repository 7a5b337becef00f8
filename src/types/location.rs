//! Map positions and the outcome of resolving a sighting onto the campus map.

use serde::{Deserialize, Serialize};

use super::common::SightingId;

/// A position on the campus map image, expressed as percentages (0-100) of
/// its width and height, independent of rendered pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in percent units.
    pub fn distance_to(self, other: MapPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// How a resolved position was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionSource {
    /// The record carried an explicit pixel pair; it is returned unchanged.
    Explicit,
    /// The location label matched a named campus location.
    Named,
    /// No entry matched; the point is a jittered placeholder so something
    /// renders. It is not ground truth and renderers should mark it as such.
    Fallback,
}

/// A plottable map position together with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPosition {
    pub point: MapPoint,
    pub source: PositionSource,
    /// Canonical label of the matched entry, present for [`PositionSource::Named`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ResolvedPosition {
    /// True unless this position is the documented no-match placeholder.
    pub fn is_ground_truth(&self) -> bool {
        self.source != PositionSource::Fallback
    }
}

/// A sighting pinned to the map for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightingMarker {
    pub id: SightingId,
    pub position: ResolvedPosition,
}
