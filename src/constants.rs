//! Shared tunables for resolution, search, and local persistence.

/// Radius (in percent units) inside which a map point is certified as one of
/// the named campus locations. Beyond this the generic label is returned.
pub const NEAREST_LABEL_RADIUS: f64 = 10.0;

/// Label returned when a point is not close enough to any named location.
pub const CUSTOM_LOCATION_LABEL: &str = "Campus (Custom Location)";

/// Base point for the no-match fallback position, percent units.
pub const FALLBACK_BASE_X: f64 = 45.0;
pub const FALLBACK_BASE_Y: f64 = 45.0;

/// Width of the jitter applied per axis to the fallback base, percent units.
/// Fallback points always land inside `[45, 55) x [45, 55)`.
pub const FALLBACK_JITTER_SPAN: f64 = 10.0;

/// Maximum entries retained in the search history; older entries are evicted
/// silently.
pub const HISTORY_CAPACITY: usize = 10;

/// Number of leading results sampled when deriving search suggestions.
pub const SUGGESTION_SAMPLE: usize = 5;

/// Default number of entries in the recent-sightings feed.
pub const RECENT_FEED_LIMIT: usize = 10;

/// Store key the search history persists under.
pub const HISTORY_STORE_KEY: &str = "searchHistory";

/// Store key the observer settings persist under.
pub const SETTINGS_STORE_KEY: &str = "observerSettings";

/// Example queries offered alongside the recency history. Static; never
/// persisted and never deduplicated against the history itself.
pub const RECOMMENDED_QUERIES: [&str; 5] = [
    "Red-tailed Hawk",
    "Coyote",
    "Squirrel",
    "Trousdale Parkway",
    "Alumni Park",
];
