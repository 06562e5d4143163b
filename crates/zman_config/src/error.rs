//! Error type for configuration files.

use std::path::PathBuf;

use thiserror::Error;
use zman_halachic::ZmanimError;
use zman_solar::LocationError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("place {place}: {source}")]
    InvalidLocation {
        place: String,
        #[source]
        source: LocationError,
    },
    #[error("[zmanim] table: {0}")]
    InvalidZmanim(#[from] ZmanimError),
    #[error("no place named {0:?} in config")]
    UnknownPlace(String),
    #[error("place {0:?} is defined more than once")]
    DuplicatePlace(String),
}
