//! Error types for crescendo-core.

use thiserror::Error;

/// Error type for core domain operations.
///
/// Lane and point mutations never error by design; errors exist only where
/// foreign input is parsed or an invalid range is supplied.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid color: {0:?}. Expected #rrggbb")]
    InvalidColor(String),

    #[error("Invalid loop range: start={start}, end={end}")]
    InvalidLoopRange { start: f64, end: f64 },
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
