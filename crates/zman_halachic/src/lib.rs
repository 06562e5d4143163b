//! Halachic times of day built on the solar horizon solver.
//!
//! This crate provides:
//! - Sunrise, sunset, solar noon and depression-angle crossings as
//!   `DateTime<Utc>` instants with the calendar-day boundary resolved
//! - The registry of day definitions (GRA, MGA variants, twilight angles)
//! - Temporal hours and the table of named zmanim
//! - [`ZmanimContext`], a per-day query surface with batch evaluation
//!
//! A time that cannot occur on a given day is an [`Occurrence::Absent`],
//! never a sentinel or an error.

pub mod config;
pub mod context;
pub mod day_definition;
pub mod error;
pub mod occurrence;
pub mod solar_day;
pub mod temporal_hour;
pub mod zman;

pub use config::ZmanimConfig;
pub use context::{ZmanValue, ZmanimContext};
pub use day_definition::{DayAnchors, DayDefinition, DayDefinitionId, DayRule};
pub use error::ZmanimError;
pub use occurrence::{Absence, Occurrence};
pub use solar_day::{
    SolarDay, sea_level_sunrise, sea_level_sunset, solar_midnight, solar_noon, sunrise,
    sunrise_offset_by_degrees, sunset, sunset_offset_by_degrees,
};
pub use temporal_hour::{HOURS_PER_DAY, ShaahZmanis, temporal_hour};
pub use zman::{Anchor, ConfiguredOffset, Offset, ZMANIM, ZmanDef, ZmanId, evaluate};
pub use zman_solar::Location;
