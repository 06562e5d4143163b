//! Present-or-absent results.
//!
//! A zman that cannot happen on a given day (the Sun never reaches the
//! required depression) is an [`Occurrence::Absent`], carrying the reason.
//! It is never a zero time, never a sentinel, never an error.

use serde::Serialize;
use zman_solar::HorizonEvent;

/// Why a time does not occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Absence {
    /// The Sun stays below the required altitude all day.
    NeverRises,
    /// The Sun stays above the required altitude all day.
    NeverSets,
    /// The day's end does not come after its start.
    InvertedDay,
}

impl Absence {
    /// Short human-readable reason.
    pub fn description(self) -> &'static str {
        match self {
            Self::NeverRises => "sun does not reach this altitude today",
            Self::NeverSets => "sun does not descend to this altitude today",
            Self::InvertedDay => "day ends before it begins",
        }
    }
}

/// A value that either occurs or is absent for a stated reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occurrence<T> {
    At(T),
    Absent(Absence),
}

impl<T> Occurrence<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Occurrence<U> {
        match self {
            Self::At(v) => Occurrence::At(f(v)),
            Self::Absent(a) => Occurrence::Absent(a),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Occurrence<U>) -> Occurrence<U> {
        match self {
            Self::At(v) => f(v),
            Self::Absent(a) => Occurrence::Absent(a),
        }
    }

    /// Both values, or the first absence.
    pub fn zip<U>(self, other: Occurrence<U>) -> Occurrence<(T, U)> {
        match (self, other) {
            (Self::At(a), Occurrence::At(b)) => Occurrence::At((a, b)),
            (Self::Absent(a), _) | (_, Occurrence::Absent(a)) => Occurrence::Absent(a),
        }
    }

    pub fn at(self) -> Option<T> {
        match self {
            Self::At(v) => Some(v),
            Self::Absent(_) => None,
        }
    }

    pub fn absence(&self) -> Option<Absence> {
        match self {
            Self::At(_) => None,
            Self::Absent(a) => Some(*a),
        }
    }

    pub fn is_at(&self) -> bool {
        matches!(self, Self::At(_))
    }
}

impl Occurrence<f64> {
    /// Minutes after 0h UTC of a horizon crossing.
    pub fn from_horizon(event: HorizonEvent) -> Self {
        match event {
            HorizonEvent::Event { utc_minutes } => Self::At(utc_minutes),
            HorizonEvent::NeverRises => Self::Absent(Absence::NeverRises),
            HorizonEvent::NeverSets => Self::Absent(Absence::NeverSets),
        }
    }
}
