//! Types and constants for horizon-crossing calculations.
//!
//! Provides the crossing direction, the crossing result, and the zenith
//! adjustment for refraction, solar radius and observer elevation.

/// Zenith of the geometric horizon in degrees.
pub const GEOMETRIC_ZENITH: f64 = 90.0;

/// Apparent solar radius in degrees (16 arcmin).
pub const SOLAR_RADIUS_DEG: f64 = 16.0 / 60.0;

/// Atmospheric refraction at the horizon in degrees (34 arcmin).
pub const REFRACTION_DEG: f64 = 34.0 / 60.0;

/// Earth radius used for the elevation dip, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6_356.9;

/// Which side of solar noon the crossing is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizonDirection {
    /// Sun ascending through the zenith angle (morning).
    Sunrise,
    /// Sun descending through the zenith angle (evening).
    Sunset,
}

impl HorizonDirection {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Result of a horizon-crossing computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonEvent {
    /// Crossing occurs this many minutes after 0h UTC, in [0, 1440).
    Event { utc_minutes: f64 },
    /// The Sun stays below the zenith angle all day.
    NeverRises,
    /// The Sun stays above the zenith angle all day.
    NeverSets,
}

impl HorizonEvent {
    /// Minutes after 0h UTC, or `None` when there is no crossing.
    pub fn utc_minutes(self) -> Option<f64> {
        match self {
            Self::Event { utc_minutes } => Some(utc_minutes),
            Self::NeverRises | Self::NeverSets => None,
        }
    }

    pub fn is_event(self) -> bool {
        matches!(self, Self::Event { .. })
    }
}

/// Kind of solar event, used to place a UTC time-of-day on the right date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEventKind {
    Sunrise,
    Sunset,
    Noon,
    Midnight,
}

impl From<HorizonDirection> for SolarEventKind {
    fn from(direction: HorizonDirection) -> Self {
        match direction {
            HorizonDirection::Sunrise => Self::Sunrise,
            HorizonDirection::Sunset => Self::Sunset,
        }
    }
}

/// Dip of the true horizon for an observer `elevation_m` above it, degrees.
///
/// `acos(R / (R + h))`. Exactly zero at sea level.
pub fn elevation_adjustment_deg(elevation_m: f64) -> f64 {
    let h_km = elevation_m / 1000.0;
    (EARTH_RADIUS_KM / (EARTH_RADIUS_KM + h_km)).acos().to_degrees()
}

/// Zenith actually solved for.
///
/// The geometric zenith (exactly 90°) becomes the visible-horizon zenith by
/// adding solar radius and refraction. Any zenith is widened by the
/// elevation dip; pass `elevation_m = 0.0` for sea level.
pub fn adjusted_zenith(zenith_deg: f64, elevation_m: f64) -> f64 {
    let mut adjusted = zenith_deg + elevation_adjustment_deg(elevation_m);
    if zenith_deg == GEOMETRIC_ZENITH {
        adjusted += SOLAR_RADIUS_DEG + REFRACTION_DEG;
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_adjustment_is_exactly_zero() {
        assert_eq!(elevation_adjustment_deg(0.0), 0.0);
    }

    #[test]
    fn adjustment_800m() {
        // acos(6356.9 / 6357.7) ≈ 0.909 deg
        let a = elevation_adjustment_deg(800.0);
        assert!((a - 0.9089).abs() < 1e-3, "800 m dip = {a}");
    }

    #[test]
    fn adjustment_grows_with_height() {
        assert!(elevation_adjustment_deg(100.0) < elevation_adjustment_deg(1000.0));
    }

    #[test]
    fn geometric_zenith_gets_refraction() {
        let z = adjusted_zenith(GEOMETRIC_ZENITH, 0.0);
        assert!((z - (90.0 + 50.0 / 60.0)).abs() < 1e-12, "z = {z}");
    }

    #[test]
    fn depression_zenith_unchanged_at_sea_level() {
        assert_eq!(adjusted_zenith(106.1, 0.0), 106.1);
    }

    #[test]
    fn depression_zenith_widened_by_elevation() {
        let z = adjusted_zenith(96.0, 800.0);
        assert!((z - 96.0 - elevation_adjustment_deg(800.0)).abs() < 1e-12);
    }

    #[test]
    fn direction_is_rising() {
        assert!(HorizonDirection::Sunrise.is_rising());
        assert!(!HorizonDirection::Sunset.is_rising());
    }

    #[test]
    fn event_minutes() {
        assert_eq!(HorizonEvent::Event { utc_minutes: 12.5 }.utc_minutes(), Some(12.5));
        assert_eq!(HorizonEvent::NeverRises.utc_minutes(), None);
        assert!(!HorizonEvent::NeverSets.is_event());
    }
}
