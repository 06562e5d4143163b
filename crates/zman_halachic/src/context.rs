//! Per-day query context.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::Serialize;
use zman_solar::Location;

use crate::config::ZmanimConfig;
use crate::day_definition::{DayAnchors, DayDefinitionId};
use crate::error::ZmanimError;
use crate::occurrence::Occurrence;
use crate::solar_day::{self, SolarDay};
use crate::temporal_hour::ShaahZmanis;
use crate::zman::{ZMANIM, ZmanId, evaluate};

/// One computed zman.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZmanValue {
    pub id: ZmanId,
    pub time: Occurrence<DateTime<Utc>>,
}

/// A location, a civil date and a validated configuration.
///
/// Immutable: changing the date builds a new context, so nothing computed
/// for one day is ever reused for another.
#[derive(Debug, Clone, PartialEq)]
pub struct ZmanimContext {
    location: Location,
    date: NaiveDate,
    config: ZmanimConfig,
    solar_day: SolarDay,
}

impl ZmanimContext {
    pub fn new(
        location: Location,
        date: NaiveDate,
        config: ZmanimConfig,
    ) -> Result<Self, ZmanimError> {
        config.validate()?;
        let solar_day = SolarDay::new(&location, date, config.use_elevation);
        Ok(Self {
            location,
            date,
            config,
            solar_day,
        })
    }

    /// Same location and configuration on another date.
    pub fn with_date(&self, date: NaiveDate) -> Self {
        let solar_day = SolarDay::new(&self.location, date, self.config.use_elevation);
        Self {
            location: self.location.clone(),
            date,
            config: self.config,
            solar_day,
        }
    }

    /// `None` at the end of the representable date range.
    pub fn next_day(&self) -> Option<Self> {
        self.date.succ_opt().map(|d| self.with_date(d))
    }

    pub fn previous_day(&self) -> Option<Self> {
        self.date.pred_opt().map(|d| self.with_date(d))
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn config(&self) -> &ZmanimConfig {
        &self.config
    }

    pub fn solar_day(&self) -> &SolarDay {
        &self.solar_day
    }

    pub fn sunrise(&self) -> Occurrence<DateTime<Utc>> {
        self.solar_day.sunrise
    }

    pub fn sunset(&self) -> Occurrence<DateTime<Utc>> {
        self.solar_day.sunset
    }

    pub fn sea_level_sunrise(&self) -> Occurrence<DateTime<Utc>> {
        self.solar_day.sea_level_sunrise
    }

    pub fn sea_level_sunset(&self) -> Occurrence<DateTime<Utc>> {
        self.solar_day.sea_level_sunset
    }

    pub fn solar_noon(&self) -> DateTime<Utc> {
        solar_day::solar_noon(&self.location, self.date)
    }

    pub fn solar_midnight(&self) -> DateTime<Utc> {
        solar_day::solar_midnight(&self.location, self.date)
    }

    pub fn day_anchors(&self, id: DayDefinitionId) -> DayAnchors {
        DayAnchors::resolve(&id.definition(&self.config), &self.solar_day)
    }

    pub fn temporal_hour(&self, id: DayDefinitionId) -> Occurrence<ShaahZmanis> {
        self.day_anchors(id).temporal_hour()
    }

    pub fn zman(&self, id: ZmanId) -> Occurrence<DateTime<Utc>> {
        let def = id.definition();
        evaluate(def, &self.day_anchors(def.day), &self.config)
    }

    /// Evaluate `ids` in order, resolving each day definition once.
    pub fn zmanim(&self, ids: &[ZmanId]) -> Vec<ZmanValue> {
        let mut anchors: BTreeMap<DayDefinitionId, DayAnchors> = BTreeMap::new();
        let values: Vec<ZmanValue> = ids
            .iter()
            .map(|&id| {
                let def = id.definition();
                let day = anchors
                    .entry(def.day)
                    .or_insert_with(|| self.day_anchors(def.day));
                ZmanValue {
                    id,
                    time: evaluate(def, day, &self.config),
                }
            })
            .collect();
        debug!(
            "{} zmanim over {} day definitions for {} on {}",
            values.len(),
            anchors.len(),
            self.location.name(),
            self.date
        );
        values
    }

    /// Every registered zman, in table order.
    pub fn all_zmanim(&self) -> Vec<ZmanValue> {
        let ids: Vec<ZmanId> = ZMANIM.iter().map(|def| def.id).collect();
        self.zmanim(&ids)
    }
}
