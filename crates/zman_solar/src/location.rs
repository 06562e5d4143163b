//! Observer location.

use chrono_tz::Tz;

use crate::error::LocationError;

/// A named place on Earth's surface.
///
/// Validated once at construction; fields are read-only afterwards so a
/// location can be shared freely across threads and queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
    timezone: Tz,
}

impl Location {
    /// Build a location from an IANA timezone name such as `"Asia/Jerusalem"`.
    pub fn new(
        name: impl Into<String>,
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        timezone: &str,
    ) -> Result<Self, LocationError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| LocationError::UnknownTimezone(timezone.to_string()))?;
        Self::with_timezone(name, latitude_deg, longitude_deg, elevation_m, tz)
    }

    /// Build a location from an already-parsed timezone.
    pub fn with_timezone(
        name: impl Into<String>,
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        timezone: Tz,
    ) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(LocationError::LatitudeOutOfRange(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(LocationError::LongitudeOutOfRange(longitude_deg));
        }
        if !elevation_m.is_finite() || elevation_m < 0.0 {
            return Err(LocationError::InvalidElevation(elevation_m));
        }
        Ok(Self {
            name: name.into(),
            latitude_deg,
            longitude_deg,
            elevation_m,
            timezone,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geodetic latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Height above sea level in meters.
    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}
