//! Proportional (temporal) hours.

use chrono::{DateTime, TimeDelta, Utc};

use crate::occurrence::{Absence, Occurrence};

/// Hours in a halachic day, dawn to dusk.
pub const HOURS_PER_DAY: f64 = 12.0;

/// One twelfth of a day's span, kept in fractional milliseconds so that
/// twelve of them add back up to the span.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ShaahZmanis {
    millis: f64,
}

impl ShaahZmanis {
    pub fn from_millis(millis: f64) -> Self {
        Self { millis }
    }

    pub fn as_millis(self) -> f64 {
        self.millis
    }

    pub fn as_minutes(self) -> f64 {
        self.millis / 60_000.0
    }

    /// `k` temporal hours, truncated to the millisecond.
    pub fn times(self, k: f64) -> TimeDelta {
        TimeDelta::milliseconds((self.millis * k).trunc() as i64)
    }
}

/// Clock minutes as a duration, truncated to the millisecond.
pub fn minutes_delta(minutes: f64) -> TimeDelta {
    TimeDelta::milliseconds((minutes * 60_000.0).trunc() as i64)
}

/// `(dusk - dawn) / 12`; [`Absence::InvertedDay`] unless dusk is after dawn.
pub fn temporal_hour(
    dawn: Occurrence<DateTime<Utc>>,
    dusk: Occurrence<DateTime<Utc>>,
) -> Occurrence<ShaahZmanis> {
    dawn.zip(dusk).and_then(|(start, end)| {
        let span_ms = (end - start).num_milliseconds();
        if span_ms <= 0 {
            return Occurrence::Absent(Absence::InvertedDay);
        }
        Occurrence::At(ShaahZmanis::from_millis(span_ms as f64 / HOURS_PER_DAY))
    })
}
