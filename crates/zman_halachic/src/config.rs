//! Parameters of the configurable day definitions and offsets.

use serde::Deserialize;

use crate::error::ZmanimError;

/// Longest offset accepted for any minute parameter: half a day.
const MAX_OFFSET_MINUTES: f64 = 720.0;

/// Caller-tunable zmanim parameters.
///
/// Each field maps onto one day-definition parameter:
/// - `dawn_dusk_degree` → [`DayDefinitionId::MgaDegrees`](crate::DayDefinitionId::MgaDegrees)
/// - `fixed_minute_offset` → [`DayDefinitionId::MgaFixed`](crate::DayDefinitionId::MgaFixed)
/// - `proportional_baseline_minutes` → [`MgaZmanis`](crate::DayDefinitionId::MgaZmanis)
/// - `use_elevation` → the horizon rule of [`DayDefinitionId::Gra`](crate::DayDefinitionId::Gra)
///   and the span of every proportional rule
/// - `candle_lighting_offset_minutes` → minutes before sea-level sunset
/// - `nightfall_sunset_offset_minutes` → minutes after sea-level sunset
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZmanimConfig {
    pub dawn_dusk_degree: f64,
    pub fixed_minute_offset: f64,
    pub proportional_baseline_minutes: f64,
    pub use_elevation: bool,
    pub candle_lighting_offset_minutes: f64,
    pub nightfall_sunset_offset_minutes: f64,
}

impl Default for ZmanimConfig {
    fn default() -> Self {
        Self {
            dawn_dusk_degree: 16.1,
            fixed_minute_offset: 72.0,
            proportional_baseline_minutes: 72.0,
            use_elevation: false,
            candle_lighting_offset_minutes: 18.0,
            nightfall_sunset_offset_minutes: 72.0,
        }
    }
}

impl ZmanimConfig {
    /// Reject non-finite or out-of-range parameters.
    pub fn validate(&self) -> Result<(), ZmanimError> {
        let degree = self.dawn_dusk_degree;
        if !degree.is_finite() || degree <= 0.0 || degree >= 90.0 {
            return Err(ZmanimError::InvalidConfig {
                field: "dawn_dusk_degree",
                value: degree,
                reason: "must be within (0, 90) degrees",
            });
        }

        let minutes = [
            ("fixed_minute_offset", self.fixed_minute_offset),
            ("proportional_baseline_minutes", self.proportional_baseline_minutes),
            ("candle_lighting_offset_minutes", self.candle_lighting_offset_minutes),
            ("nightfall_sunset_offset_minutes", self.nightfall_sunset_offset_minutes),
        ];
        for (field, value) in minutes {
            if !value.is_finite() || !(0.0..=MAX_OFFSET_MINUTES).contains(&value) {
                return Err(ZmanimError::InvalidConfig {
                    field,
                    value,
                    reason: "must be within [0, 720] minutes",
                });
            }
        }
        Ok(())
    }
}
