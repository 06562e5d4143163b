//! Solar ephemeris and horizon-crossing solver.
//!
//! This crate provides:
//! - The NOAA low-precision solar ephemeris as a function of Julian century
//! - Sunrise/sunset and depression-angle crossings with an explicit
//!   no-crossing result for polar days and nights
//! - Zenith adjustment for refraction, solar radius and observer elevation
//! - Solar elevation/azimuth at an instant
//! - The validated observer [`Location`]
//!
//! Everything is a pure function; no I/O, no shared state.

pub mod ephemeris;
pub mod error;
pub mod horizon;
pub mod horizon_types;
pub mod location;
pub mod position;
pub mod util;

pub use ephemeris::SolarPosition;
pub use error::LocationError;
pub use horizon::{
    event_day_shift, horizon_utc, horizon_utc_adjusted, hour_angle_argument, solar_midnight_utc,
    solar_noon_utc,
};
pub use horizon_types::{
    EARTH_RADIUS_KM, GEOMETRIC_ZENITH, HorizonDirection, HorizonEvent, REFRACTION_DEG,
    SOLAR_RADIUS_DEG, SolarEventKind, adjusted_zenith, elevation_adjustment_deg,
};
pub use location::Location;
pub use position::{HorizontalPosition, solar_position_at};
