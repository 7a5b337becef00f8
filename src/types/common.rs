//! Identifiers shared across the data model.

/// Opaque sighting identifier assigned by the backing store.
pub type SightingId = u64;
