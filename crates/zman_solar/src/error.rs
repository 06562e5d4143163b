//! Error types for observer locations.

use thiserror::Error;

/// A location rejected at construction.
///
/// The numerical core never sees an invalid location; everything downstream
/// of [`crate::Location::new`] is infallible.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LocationError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("elevation {0} must be finite and non-negative")]
    InvalidElevation(f64),
    #[error("unknown timezone identifier: {0}")]
    UnknownTimezone(String),
}
