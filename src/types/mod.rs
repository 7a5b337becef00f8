//! Public types exposed by the `wildtrack-core` crate.

pub mod common;
pub mod location;
pub mod profile;
pub mod search;
pub mod sighting;

pub use common::SightingId;
pub use location::{MapPoint, PositionSource, ResolvedPosition, SightingMarker};
pub use profile::{ProfileStatistics, ProfileSummary, UserRecord};
pub use search::{HistoryOrigin, HistoryRow, SearchOutcome, Suggestions};
pub use sighting::Sighting;
