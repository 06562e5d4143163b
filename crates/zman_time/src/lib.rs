//! Time conversions for the zmanim engine.
//!
//! This crate provides:
//! - Julian Day ↔ proleptic Gregorian calendar conversions
//! - Julian Century (since J2000.0) ↔ Julian Day
//! - UTC minute-of-day ↔ `chrono::DateTime<Utc>` instants
//!
//! Nothing here can fail: every civil date in the supported range maps to a
//! finite Julian Day.

pub mod julian;
pub mod utc_time;

pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, MINUTES_PER_DAY, calendar_to_jd, centuries_to_jd,
    jd_to_calendar, jd_to_centuries, julian_day,
};
pub use utc_time::{instant_from_utc_minutes, offset_instant, utc_midnight, utc_minutes_of};
