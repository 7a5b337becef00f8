//! Campus location resolution.
//!
//! Forward: a free-text location label, or an explicit pixel pair, to a
//! plottable map position. Inverse: a pixel pair back to the nearest named
//! location within a fixed radius. Both directions derive from one
//! canonical table; both are pure over static data. Invariants: an explicit
//! pair always wins, forward matching scans in table-definition order, and
//! a label that matches nothing still yields a (clearly marked) fallback
//! point so something renders.

mod table;

use rand::Rng;

pub use table::NamedLocation;

use crate::constants::{
    CUSTOM_LOCATION_LABEL, FALLBACK_BASE_X, FALLBACK_BASE_Y, FALLBACK_JITTER_SPAN,
    NEAREST_LABEL_RADIUS,
};
use crate::text::fold;
use crate::types::{MapPoint, PositionSource, ResolvedPosition, Sighting};

/// Resolver over the canonical named-location table.
#[derive(Debug, Clone, Copy)]
pub struct CampusAtlas {
    entries: &'static [NamedLocation],
}

impl Default for CampusAtlas {
    fn default() -> Self {
        Self {
            entries: table::canonical(),
        }
    }
}

impl CampusAtlas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical table, in definition order.
    pub fn entries(&self) -> &'static [NamedLocation] {
        self.entries
    }

    /// Forward resolution with a caller-supplied randomness source for the
    /// no-match fallback. Returns `None` only when neither a label nor a
    /// complete explicit pair is present.
    pub fn resolve_position_with<R: Rng + ?Sized>(
        &self,
        label: Option<&str>,
        explicit: Option<MapPoint>,
        rng: &mut R,
    ) -> Option<ResolvedPosition> {
        if let Some(point) = explicit {
            return Some(ResolvedPosition {
                point,
                source: PositionSource::Explicit,
                label: None,
            });
        }

        let label = label.map(str::trim).filter(|l| !l.is_empty())?;
        let folded = fold(label);

        for entry in self.entries {
            if folded.contains(&entry.label) || entry.label.contains(&folded) {
                return Some(ResolvedPosition {
                    point: entry.point,
                    source: PositionSource::Named,
                    label: Some(entry.label.clone()),
                });
            }
        }

        let point = MapPoint::new(
            FALLBACK_BASE_X + rng.gen_range(0.0..FALLBACK_JITTER_SPAN),
            FALLBACK_BASE_Y + rng.gen_range(0.0..FALLBACK_JITTER_SPAN),
        );
        tracing::debug!(label, x = point.x, y = point.y, "no table match, using fallback point");
        Some(ResolvedPosition {
            point,
            source: PositionSource::Fallback,
            label: None,
        })
    }

    /// Forward resolution using thread-local randomness for the fallback.
    pub fn resolve_position(
        &self,
        label: Option<&str>,
        explicit: Option<MapPoint>,
    ) -> Option<ResolvedPosition> {
        self.resolve_position_with(label, explicit, &mut rand::thread_rng())
    }

    /// Resolve a sighting record. One-sided pixel pairs fall through to the
    /// label path; records with neither are skipped by the caller.
    pub fn marker_position_with<R: Rng + ?Sized>(
        &self,
        sighting: &Sighting,
        rng: &mut R,
    ) -> Option<ResolvedPosition> {
        self.resolve_position_with(sighting.location_label(), sighting.explicit_point(), rng)
    }

    /// Inverse resolution: the label of the nearest table entry, or the
    /// generic custom-location label when the nearest entry is farther than
    /// the certification radius. Ties go to the earlier table entry.
    pub fn nearest_label(&self, point: MapPoint) -> &str {
        let mut best: Option<(&NamedLocation, f64)> = None;
        for entry in self.entries {
            let distance = point.distance_to(entry.point);
            if best.is_none_or(|(_, current)| distance < current) {
                best = Some((entry, distance));
            }
        }
        match best {
            Some((entry, distance)) if distance <= NEAREST_LABEL_RADIUS => entry.label.as_str(),
            _ => CUSTOM_LOCATION_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn atlas() -> CampusAtlas {
        CampusAtlas::new()
    }

    #[test]
    fn explicit_pair_wins_over_label() {
        let explicit = MapPoint::new(12.5, 88.0);
        let resolved = atlas()
            .resolve_position(Some("doheny library"), Some(explicit))
            .unwrap();
        assert_eq!(resolved.source, PositionSource::Explicit);
        assert_eq!(resolved.point, explicit);
    }

    #[test]
    fn bidirectional_substring_matches() {
        // Query contained in a table label.
        let contained = atlas().resolve_position(Some("doheny"), None).unwrap();
        assert_eq!(contained.source, PositionSource::Named);

        // Query containing a table label. Scan order means the shorter
        // "doheny library" entry wins over "near doheny library".
        let containing = atlas()
            .resolve_position(Some("right near Doheny Library"), None)
            .unwrap();
        assert_eq!(containing.source, PositionSource::Named);
        assert_eq!(containing.label.as_deref(), Some("doheny library"));
        assert_eq!(containing.point, MapPoint::new(57.0, 70.0));
    }

    #[test]
    fn no_match_falls_back_inside_jitter_box() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let resolved = atlas()
                .resolve_position_with(Some("the moon"), None, &mut rng)
                .unwrap();
            assert_eq!(resolved.source, PositionSource::Fallback);
            assert!(resolved.point.x >= 45.0 && resolved.point.x < 55.0);
            assert!(resolved.point.y >= 45.0 && resolved.point.y < 55.0);
        }
    }

    #[test]
    fn nothing_to_resolve_is_none() {
        assert!(atlas().resolve_position(None, None).is_none());
        assert!(atlas().resolve_position(Some("   "), None).is_none());
    }

    #[test]
    fn one_sided_pair_falls_through_to_label() {
        let sighting = Sighting {
            location: Some("Alumni Park".to_string()),
            pixel_x: Some(30.0),
            ..Sighting::default()
        };
        let resolved = atlas()
            .marker_position_with(&sighting, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(resolved.source, PositionSource::Named);
        assert_eq!(resolved.point, MapPoint::new(52.0, 64.0));
    }

    #[test]
    fn nearest_label_at_entry_is_that_entry() {
        assert_eq!(atlas().nearest_label(MapPoint::new(82.0, 62.0)), "galen center");
    }

    #[test]
    fn nearest_label_beyond_radius_is_custom() {
        assert_eq!(atlas().nearest_label(MapPoint::new(0.0, 0.0)), CUSTOM_LOCATION_LABEL);
    }

    #[test]
    fn nearest_label_tie_goes_to_earlier_entry() {
        // (46, 51) is exactly equidistant from "trousdale parkway" (45, 50)
        // and "founders park" (47, 52); the earlier entry wins.
        assert_eq!(atlas().nearest_label(MapPoint::new(46.0, 51.0)), "trousdale parkway");
    }
}
