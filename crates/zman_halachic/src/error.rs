//! Error types for zmanim configuration and lookups.
//!
//! Geometric impossibility is not an error; it is an
//! [`Occurrence::Absent`](crate::Occurrence::Absent) value.

use thiserror::Error;

/// Errors raised at the configuration boundary.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ZmanimError {
    /// A configuration parameter is non-finite or out of range.
    #[error("invalid {field} = {value}: {reason}")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// No zman is registered under this name.
    #[error("unknown zman: {0}")]
    UnknownZman(String),
    /// No day definition is registered under this name.
    #[error("unknown day definition: {0}")]
    UnknownDayDefinition(String),
}
