//! A single chartable wind observation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the three fixed measurement altitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WindLevel {
    /// Two metres above the surface.
    M2,
    /// Ten metres above the surface.
    M10,
    /// One hundred metres above the surface.
    M100,
}

impl WindLevel {
    /// All levels, lowest first. Requests list parameters in this order.
    pub const ALL: [Self; 3] = [Self::M2, Self::M10, Self::M100];

    /// Provider parameter identifier for wind speed at this level, in m/s.
    #[must_use]
    pub const fn parameter(self) -> &'static str {
        match self {
            Self::M2 => "wind_speed_2m:ms",
            Self::M10 => "wind_speed_10m:ms",
            Self::M100 => "wind_speed_100m:ms",
        }
    }

    /// Height above the surface in metres.
    #[must_use]
    pub const fn height_m(self) -> u32 {
        match self {
            Self::M2 => 2,
            Self::M10 => 10,
            Self::M100 => 100,
        }
    }

    /// Inverse of [`WindLevel::parameter`].
    #[must_use]
    pub fn from_parameter(parameter: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.parameter() == parameter)
    }
}

/// One timestamped triple of wind speeds.
///
/// `at` is the absolute instant the sample was taken at; `timestamp` is the
/// display label derived from it. Speeds are in metres per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSample {
    /// Instant the label was derived from.
    pub at: DateTime<Utc>,
    /// Civil time label (`HH:MM` or `DD/MM HH:MM`).
    pub timestamp: String,
    /// Wind speed at 2 m.
    pub speed_at_2m: f64,
    /// Wind speed at 10 m.
    pub speed_at_10m: f64,
    /// Wind speed at 100 m.
    pub speed_at_100m: f64,
}

impl WeatherSample {
    /// Speed at the given level.
    #[must_use]
    pub const fn speed(&self, level: WindLevel) -> f64 {
        match level {
            WindLevel::M2 => self.speed_at_2m,
            WindLevel::M10 => self.speed_at_10m,
            WindLevel::M100 => self.speed_at_100m,
        }
    }

    /// True when all three speeds are finite numbers.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        WindLevel::ALL.iter().all(|l| self.speed(*l).is_finite())
    }
}
