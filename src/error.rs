//! Error type shared across the crate.
//!
//! Resolution, search, and statistics are total functions and never fail;
//! only the local persistence seam surfaces errors.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WildtrackError>;

/// Errors surfaced by the local store and the operations that persist
/// through it.
#[derive(Debug, Error)]
pub enum WildtrackError {
    #[error("local store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("local store payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("no configuration directory available for the local store")]
    NoConfigDir,
}
