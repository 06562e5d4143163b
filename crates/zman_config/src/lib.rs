//! Configuration files for zmanim queries.
//!
//! A config file is TOML with an optional `[zmanim]` table (any subset of
//! [`ZmanimConfig`] fields, the rest defaulted) and any number of
//! `[[places]]` entries:
//!
//! ```toml
//! [zmanim]
//! dawn_dusk_degree = 16.1
//! candle_lighting_offset_minutes = 40
//!
//! [[places]]
//! name = "Jerusalem"
//! latitude = 31.7767
//! longitude = 35.2345
//! elevation = 754
//! timezone = "Asia/Jerusalem"
//! ```
//!
//! Everything is validated on load; a [`ConfigFile`] that exists is usable.

pub mod error;

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use zman_halachic::ZmanimConfig;
use zman_solar::Location;

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ZMANIM_CONFIG";

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_FILE_NAME: &str = "zmanim.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaceToml {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    elevation: f64,
    timezone: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootToml {
    #[serde(default)]
    zmanim: ZmanimConfig,
    #[serde(default)]
    places: Vec<PlaceToml>,
}

/// A loaded and validated config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub zmanim: ZmanimConfig,
    pub places: Vec<Location>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let root: RootToml = toml::from_str(text)?;
        root.zmanim.validate()?;

        let mut seen = HashSet::new();
        let mut places = Vec::with_capacity(root.places.len());
        for p in root.places {
            if !seen.insert(p.name.clone()) {
                return Err(ConfigError::DuplicatePlace(p.name));
            }
            let location = Location::new(&p.name, p.latitude, p.longitude, p.elevation, &p.timezone)
                .map_err(|source| ConfigError::InvalidLocation {
                    place: p.name.clone(),
                    source,
                })?;
            places.push(location);
        }

        Ok(Self {
            zmanim: root.zmanim,
            places,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        debug!(
            "loaded {} with {} place(s)",
            path.display(),
            config.places.len()
        );
        Ok(config)
    }

    /// Load `path` if given, else the file named by [`CONFIG_ENV`], else
    /// [`DEFAULT_FILE_NAME`] in the working directory if it exists, else
    /// defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path.map(Path::to_path_buf).or_else(discover) {
            Some(p) => Self::load(&p),
            None => Ok(Self::default()),
        }
    }

    /// Look up a place by name, ignoring ASCII case.
    pub fn place(&self, name: &str) -> Result<&Location, ConfigError> {
        self.places
            .iter()
            .find(|loc| loc.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownPlace(name.to_string()))
    }
}

fn discover() -> Option<PathBuf> {
    if let Ok(p) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    let local = PathBuf::from(DEFAULT_FILE_NAME);
    local.is_file().then_some(local)
}
