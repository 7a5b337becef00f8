#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions)]
//
// Strategic lint exceptions, allowed project-wide:
//
// Documentation lints: internal/self-documenting functions don't need extensive docs.
// Public APIs should still have proper documentation.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Most of the public surface is pure read-model functions; annotating every one of
// them with #[must_use] adds noise without changing how callers use them.
#![allow(clippy::must_use_candidate)]
//
// Pattern matching: these pedantic lints often suggest changes that reduce clarity.
#![allow(clippy::manual_let_else)]
#![allow(clippy::match_same_arms)]
//
// Map coordinates are percentages compared against fixed thresholds; float casts
// here are bounded by the 0-100 coordinate space.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

/// The wildtrack-core crate version (matches `Cargo.toml`).
pub const WILDTRACK_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod atlas;
pub mod constants;
pub mod error;
pub mod session;
pub mod settings;
pub mod stats;
pub mod store;
pub mod text;
pub mod types;

pub use atlas::CampusAtlas;
pub use constants::*;
pub use error::{Result, WildtrackError};
pub use session::search::{filter_sightings, suggestions_for};
pub use session::{SearchHistory, SightingSession};
pub use settings::{HomeArea, ObserverRole, ObserverSettings};
pub use stats::{SightingStats, SpeciesCount, photo_gallery, species_tally, top_species};
pub use store::{JsonFileStore, LocalStore, MemoryStore};
pub use types::{
    HistoryOrigin, HistoryRow, MapPoint, PositionSource, ProfileStatistics, ProfileSummary,
    ResolvedPosition, SearchOutcome, Sighting, SightingId, SightingMarker, Suggestions, UserRecord,
};
