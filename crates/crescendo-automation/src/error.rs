//! Error types for crescendo-automation.
//!
//! Point mutations are no-ops on missing targets by design and never appear
//! here; errors cover snapshot serialization and invalid inputs from the
//! core domain.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] crescendo_core::Error),

    #[error("Snapshot serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
