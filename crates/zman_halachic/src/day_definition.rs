//! Registry of halachic day definitions.
//!
//! A day definition fixes where the day starts (dawn) and ends (dusk). The
//! proportional hour of every zman is one twelfth of that span.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::trace;
use serde::{Serialize, Serializer};
use zman_solar::HorizonDirection;
use zman_time::offset_instant;

use crate::config::ZmanimConfig;
use crate::error::ZmanimError;
use crate::occurrence::{Absence, Occurrence};
use crate::solar_day::SolarDay;
use crate::temporal_hour::{ShaahZmanis, minutes_delta, temporal_hour};

/// Minutes in a day whose sunrise-to-sunset span is exactly twelve hours.
const EQUAL_DAY_MINUTES: f64 = 720.0;

/// How one edge of the day is found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayRule {
    /// Sunrise or sunset, elevation adjusted when configured.
    Horizon,
    /// Sun's center this many degrees below the geometric horizon.
    Degrees(f64),
    /// Clock minutes before sea-level sunrise or after sea-level sunset.
    FixedMinutes(f64),
    /// Minutes on an equal day, scaled by the actual sunrise-to-sunset span.
    ProportionalMinutes(f64),
}

/// Dawn and dusk rules of one definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayDefinition {
    pub dawn: DayRule,
    pub dusk: DayRule,
}

impl DayDefinition {
    pub const fn symmetric(rule: DayRule) -> Self {
        Self { dawn: rule, dusk: rule }
    }
}

/// Identifier of a registered day definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayDefinitionId {
    /// Sunrise to sunset.
    Gra,
    /// Sea-level sunrise to sea-level sunset.
    GraSeaLevel,
    /// 1.583° below the horizon at both ends.
    BaalHatanya,
    /// `dawn_dusk_degree` at both ends.
    MgaDegrees,
    /// `fixed_minute_offset` clock minutes at both ends.
    MgaFixed,
    /// `proportional_baseline_minutes` proportional minutes at both ends.
    MgaZmanis,
    Mga16Point1,
    Mga18Degrees,
    Mga19Point8Degrees,
    Mga26Degrees,
    Mga60,
    Mga90,
    Mga96,
    Mga120,
    Mga90Zmanis,
    Mga96Zmanis,
    Mga120Zmanis,
    Twilight10Point2,
    Twilight11,
    Twilight11Point5,
    Twilight7Point083,
    Twilight8Point5,
    Twilight6,
}

impl DayDefinitionId {
    pub const ALL: [Self; 23] = [
        Self::Gra,
        Self::GraSeaLevel,
        Self::BaalHatanya,
        Self::MgaDegrees,
        Self::MgaFixed,
        Self::MgaZmanis,
        Self::Mga16Point1,
        Self::Mga18Degrees,
        Self::Mga19Point8Degrees,
        Self::Mga26Degrees,
        Self::Mga60,
        Self::Mga90,
        Self::Mga96,
        Self::Mga120,
        Self::Mga90Zmanis,
        Self::Mga96Zmanis,
        Self::Mga120Zmanis,
        Self::Twilight10Point2,
        Self::Twilight11,
        Self::Twilight11Point5,
        Self::Twilight7Point083,
        Self::Twilight8Point5,
        Self::Twilight6,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Gra => "gra",
            Self::GraSeaLevel => "gra-sea-level",
            Self::BaalHatanya => "baal-hatanya",
            Self::MgaDegrees => "mga-degrees",
            Self::MgaFixed => "mga-fixed",
            Self::MgaZmanis => "mga-zmanis",
            Self::Mga16Point1 => "mga-16.1-degrees",
            Self::Mga18Degrees => "mga-18-degrees",
            Self::Mga19Point8Degrees => "mga-19.8-degrees",
            Self::Mga26Degrees => "mga-26-degrees",
            Self::Mga60 => "mga-60-minutes",
            Self::Mga90 => "mga-90-minutes",
            Self::Mga96 => "mga-96-minutes",
            Self::Mga120 => "mga-120-minutes",
            Self::Mga90Zmanis => "mga-90-minutes-zmanis",
            Self::Mga96Zmanis => "mga-96-minutes-zmanis",
            Self::Mga120Zmanis => "mga-120-minutes-zmanis",
            Self::Twilight10Point2 => "twilight-10.2-degrees",
            Self::Twilight11 => "twilight-11-degrees",
            Self::Twilight11Point5 => "twilight-11.5-degrees",
            Self::Twilight7Point083 => "twilight-7.083-degrees",
            Self::Twilight8Point5 => "twilight-8.5-degrees",
            Self::Twilight6 => "twilight-6-degrees",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Gra => "sunrise to sunset",
            Self::GraSeaLevel => "sea-level sunrise to sea-level sunset",
            Self::BaalHatanya => "sun 1.583 degrees below the horizon",
            Self::MgaDegrees => "configured dawn/dusk depression angle",
            Self::MgaFixed => "configured clock minutes around sea-level sunrise/sunset",
            Self::MgaZmanis => "configured proportional minutes around sunrise/sunset",
            Self::Mga16Point1 => "sun 16.1 degrees below the horizon",
            Self::Mga18Degrees => "sun 18 degrees below the horizon",
            Self::Mga19Point8Degrees => "sun 19.8 degrees below the horizon",
            Self::Mga26Degrees => "sun 26 degrees below the horizon",
            Self::Mga60 => "60 minutes around sea-level sunrise/sunset",
            Self::Mga90 => "90 minutes around sea-level sunrise/sunset",
            Self::Mga96 => "96 minutes around sea-level sunrise/sunset",
            Self::Mga120 => "120 minutes around sea-level sunrise/sunset",
            Self::Mga90Zmanis => "90 proportional minutes around sunrise/sunset",
            Self::Mga96Zmanis => "96 proportional minutes around sunrise/sunset",
            Self::Mga120Zmanis => "120 proportional minutes around sunrise/sunset",
            Self::Twilight10Point2 => "sun 10.2 degrees below the horizon",
            Self::Twilight11 => "sun 11 degrees below the horizon",
            Self::Twilight11Point5 => "sun 11.5 degrees below the horizon",
            Self::Twilight7Point083 => "sun 7.083 degrees below the horizon",
            Self::Twilight8Point5 => "sun 8.5 degrees below the horizon",
            Self::Twilight6 => "sun 6 degrees below the horizon",
        }
    }

    /// Rules of this definition; configured definitions read `config`.
    pub fn definition(self, config: &ZmanimConfig) -> DayDefinition {
        use DayRule::{Degrees, FixedMinutes, Horizon, ProportionalMinutes};
        let rule = match self {
            Self::Gra => Horizon,
            Self::GraSeaLevel => FixedMinutes(0.0),
            Self::BaalHatanya => Degrees(1.583),
            Self::MgaDegrees => Degrees(config.dawn_dusk_degree),
            Self::MgaFixed => FixedMinutes(config.fixed_minute_offset),
            Self::MgaZmanis => ProportionalMinutes(config.proportional_baseline_minutes),
            Self::Mga16Point1 => Degrees(16.1),
            Self::Mga18Degrees => Degrees(18.0),
            Self::Mga19Point8Degrees => Degrees(19.8),
            Self::Mga26Degrees => Degrees(26.0),
            Self::Mga60 => FixedMinutes(60.0),
            Self::Mga90 => FixedMinutes(90.0),
            Self::Mga96 => FixedMinutes(96.0),
            Self::Mga120 => FixedMinutes(120.0),
            Self::Mga90Zmanis => ProportionalMinutes(90.0),
            Self::Mga96Zmanis => ProportionalMinutes(96.0),
            Self::Mga120Zmanis => ProportionalMinutes(120.0),
            Self::Twilight10Point2 => Degrees(10.2),
            Self::Twilight11 => Degrees(11.0),
            Self::Twilight11Point5 => Degrees(11.5),
            Self::Twilight7Point083 => Degrees(7.083),
            Self::Twilight8Point5 => Degrees(8.5),
            Self::Twilight6 => Degrees(6.0),
        };
        DayDefinition::symmetric(rule)
    }
}

impl fmt::Display for DayDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayDefinitionId {
    type Err = ZmanimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| ZmanimError::UnknownDayDefinition(s.to_string()))
    }
}

impl Serialize for DayDefinitionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Dawn and dusk of one day definition on one day.
///
/// Either edge may be absent independently: a dusk-based zman only needs
/// the dusk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAnchors {
    pub dawn: Occurrence<DateTime<Utc>>,
    pub dusk: Occurrence<DateTime<Utc>>,
}

impl DayAnchors {
    /// Apply `definition` to `day`.
    pub fn resolve(definition: &DayDefinition, day: &SolarDay) -> Self {
        let anchors = Self {
            dawn: resolve_edge(definition.dawn, day, HorizonDirection::Sunrise),
            dusk: resolve_edge(definition.dusk, day, HorizonDirection::Sunset),
        };
        trace!("{definition:?} on {}: {anchors:?}", day.date);
        anchors
    }

    pub fn temporal_hour(&self) -> Occurrence<ShaahZmanis> {
        temporal_hour(self.dawn, self.dusk)
    }

    /// Six temporal hours after dawn.
    pub fn midday(&self) -> Occurrence<DateTime<Utc>> {
        self.dawn
            .zip(self.temporal_hour())
            .map(|(dawn, hour)| offset_instant(dawn, hour.times(6.0)))
    }
}

fn resolve_edge(
    rule: DayRule,
    day: &SolarDay,
    direction: HorizonDirection,
) -> Occurrence<DateTime<Utc>> {
    let rising = direction.is_rising();
    match rule {
        DayRule::Horizon => {
            if rising {
                day.sunrise
            } else {
                day.sunset
            }
        }
        DayRule::Degrees(depression) => day.offset_by_degrees(depression, direction),
        DayRule::FixedMinutes(minutes) => {
            if rising {
                day.sea_level_sunrise.map(|t| offset_instant(t, -minutes_delta(minutes)))
            } else {
                day.sea_level_sunset.map(|t| offset_instant(t, minutes_delta(minutes)))
            }
        }
        DayRule::ProportionalMinutes(minutes) => {
            day.sunrise.zip(day.sunset).and_then(|(rise, set)| {
                let span_min = (set - rise).num_milliseconds() as f64 / 60_000.0;
                if span_min <= 0.0 {
                    return Occurrence::Absent(Absence::InvertedDay);
                }
                let offset = minutes_delta(minutes * span_min / EQUAL_DAY_MINUTES);
                Occurrence::At(if rising {
                    offset_instant(rise, -offset)
                } else {
                    offset_instant(set, offset)
                })
            })
        }
    }
}
