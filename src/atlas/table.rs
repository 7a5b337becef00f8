//! The canonical named-location table.
//!
//! One table serves both lookup directions (label -> point and
//! point -> nearest label). Entry order is significant: forward matching
//! scans in definition order and returns on first hit, and nearest-label
//! ties resolve to the earlier entry.

use once_cell::sync::Lazy;

use crate::types::MapPoint;

/// A campus place with a fixed canonical label and map coordinate.
#[derive(Debug, Clone)]
pub struct NamedLocation {
    /// Canonical label, already case-folded for matching.
    pub label: String,
    pub point: MapPoint,
}

/// Raw entries: approximate positions on the campus map image, percent units.
const RAW_ENTRIES: &[(&str, f64, f64)] = &[
    ("trousdale parkway", 45.0, 50.0),
    ("alumni park", 52.0, 64.0),
    ("doheny library", 57.0, 70.0),
    ("near doheny library", 54.0, 67.0),
    ("mccarthy quad", 61.0, 60.0),
    ("founders park", 47.0, 52.0),
    ("campus center", 40.0, 68.0),
    ("leavey library", 63.0, 50.0),
    ("galen center", 82.0, 62.0),
    ("school of engineering", 27.0, 70.0),
    ("science center", 21.0, 76.0),
    ("school of cinematic arts", 36.0, 29.0),
    ("school of music", 48.0, 37.0),
    ("shrine auditorium", 74.0, 30.0),
    ("university club", 62.0, 39.0),
    ("athletic center", 34.0, 39.0),
    ("loker track stadium", 30.0, 47.0),
    ("dedeaux stadium", 17.0, 24.0),
    ("usc village", 49.0, 11.0),
    ("parkside", 13.0, 82.0),
    ("evk", 68.0, 55.0),
];

static CANONICAL_TABLE: Lazy<Vec<NamedLocation>> = Lazy::new(|| {
    RAW_ENTRIES
        .iter()
        .map(|&(label, x, y)| NamedLocation {
            label: crate::text::fold(label),
            point: MapPoint::new(x, y),
        })
        .collect()
});

/// The canonical table, in definition order.
pub fn canonical() -> &'static [NamedLocation] {
    &CANONICAL_TABLE
}
