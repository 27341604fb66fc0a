//! Configuration types shared by the orchestrator and connectors.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{AnemoError, WindLevel};

/// Geographic point the series is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees, `[-90, 90]`.
    pub lat: f64,
    /// Longitude in decimal degrees, `[-180, 180]`.
    pub lon: f64,
}

impl Coordinate {
    /// Construct a coordinate without validation.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Habitat site used by the dashboard.
    pub const HABITAT_SITE: Self = Self::new(-63.3215, -58.9020);

    fn validate(&self) -> Result<(), AnemoError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(AnemoError::invalid_arg(format!(
                "latitude out of range: {}",
                self.lat
            )));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(AnemoError::invalid_arg(format!(
                "longitude out of range: {}",
                self.lon
            )));
        }
        Ok(())
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::HABITAT_SITE
    }
}

/// Time window policy for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TimeWindow {
    /// A fixed historical range `[start, end]`.
    Fixed {
        /// Inclusive start instant.
        start: DateTime<Utc>,
        /// Inclusive end instant.
        end: DateTime<Utc>,
    },
    /// A window ending at "now" and reaching back by `lookback`.
    Rolling {
        /// Length of the window.
        lookback: Duration,
    },
}

impl TimeWindow {
    /// Rolling window of the last `hours` hours.
    #[must_use]
    pub const fn last_hours(hours: u64) -> Self {
        Self::Rolling {
            lookback: Duration::from_secs(hours * 3600),
        }
    }

    /// Rolling window of the last `days` days.
    #[must_use]
    pub const fn last_days(days: u64) -> Self {
        Self::last_hours(days * 24)
    }

    /// Resolve the policy into absolute `(start, end)` instants relative to `now`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the window is empty, inverted, or its lookback
    /// cannot be represented as a calendar offset.
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>), AnemoError> {
        match *self {
            Self::Fixed { start, end } => {
                if start >= end {
                    return Err(AnemoError::invalid_arg(format!(
                        "window start {start} is not before end {end}"
                    )));
                }
                Ok((start, end))
            }
            Self::Rolling { lookback } => {
                if lookback.is_zero() {
                    return Err(AnemoError::invalid_arg("rolling window lookback is zero"));
                }
                let delta = TimeDelta::from_std(lookback)
                    .map_err(|e| AnemoError::invalid_arg(format!("lookback too large: {e}")))?;
                let start = now
                    .checked_sub_signed(delta)
                    .ok_or_else(|| AnemoError::invalid_arg("lookback reaches before epoch range"))?;
                Ok((start, now))
            }
        }
    }
}

/// Provider sampling interval, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SamplingInterval(u32);

impl SamplingInterval {
    /// One reading every 20 minutes.
    pub const TWENTY_MINUTES: Self = Self(20);
    /// One reading per hour.
    pub const HOURLY: Self = Self(60);

    /// Interval of `minutes` minutes.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Interval length in minutes.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Interval as a signed calendar offset.
    #[must_use]
    pub fn as_time_delta(self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.0))
    }

    /// ISO-8601 duration, e.g. `PT20M` or `PT1H`.
    #[must_use]
    pub fn iso8601(self) -> String {
        if self.0 > 0 && self.0 % 60 == 0 {
            format!("PT{}H", self.0 / 60)
        } else {
            format!("PT{}M", self.0)
        }
    }
}

/// Closed range of plausible speeds (m/s) used for synthetic samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
}

impl SpeedRange {
    /// Construct a range without validation.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
    }
}

/// Per-level ranges for synthetic samples. Higher altitudes get higher means and spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackRanges {
    /// Range at 2 m.
    pub at_2m: SpeedRange,
    /// Range at 10 m.
    pub at_10m: SpeedRange,
    /// Range at 100 m.
    pub at_100m: SpeedRange,
}

impl FallbackRanges {
    /// Range for a level.
    #[must_use]
    pub const fn for_level(&self, level: WindLevel) -> SpeedRange {
        match level {
            WindLevel::M2 => self.at_2m,
            WindLevel::M10 => self.at_10m,
            WindLevel::M100 => self.at_100m,
        }
    }
}

impl Default for FallbackRanges {
    fn default() -> Self {
        Self {
            at_2m: SpeedRange::new(5.0, 15.0),
            at_10m: SpeedRange::new(8.0, 23.0),
            at_100m: SpeedRange::new(15.0, 40.0),
        }
    }
}

/// Configuration for one wind-series provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSeriesConfig {
    /// Point the series is requested for.
    pub coordinate: Coordinate,
    /// Window policy, resolved per call.
    pub window: TimeWindow,
    /// Provider sampling interval.
    pub interval: SamplingInterval,
    /// Keep every `stride`-th normalized sample, starting with the first.
    pub stride: usize,
    /// Upper bound on the number of returned samples.
    pub max_points: usize,
    /// Ranges used by the synthetic generator.
    pub fallback: FallbackRanges,
    /// Zone the display labels are rendered in.
    pub label_tz: Tz,
    /// When false, the remote source is never called.
    pub remote_enabled: bool,
    /// Upper bound on a single source call.
    pub timeout: Duration,
    /// Seed for the synthetic generator; `None` uses thread-local entropy.
    pub synthetic_seed: Option<u64>,
}

impl WindSeriesConfig {
    /// Last 24 hours at 20-minute resolution, downsampled to 24 hourly points.
    #[must_use]
    pub fn intraday() -> Self {
        Self {
            coordinate: Coordinate::HABITAT_SITE,
            window: TimeWindow::last_hours(24),
            interval: SamplingInterval::TWENTY_MINUTES,
            stride: 3,
            max_points: 24,
            fallback: FallbackRanges::default(),
            label_tz: Tz::UTC,
            remote_enabled: true,
            timeout: Duration::from_secs(10),
            synthetic_seed: None,
        }
    }

    /// Last 7 days at hourly resolution, downsampled to 42 four-hourly points.
    #[must_use]
    pub fn weekly() -> Self {
        Self {
            window: TimeWindow::last_days(7),
            interval: SamplingInterval::HOURLY,
            stride: 4,
            max_points: 42,
            ..Self::intraday()
        }
    }

    /// Check the configuration for values the pipeline cannot honor.
    ///
    /// # Errors
    /// Returns `InvalidArg` describing the first offending field.
    pub fn validate(&self) -> Result<(), AnemoError> {
        self.coordinate.validate()?;
        if self.stride == 0 {
            return Err(AnemoError::invalid_arg("stride must be at least 1"));
        }
        if self.max_points == 0 {
            return Err(AnemoError::invalid_arg("max_points must be at least 1"));
        }
        if self.interval.minutes() == 0 {
            return Err(AnemoError::invalid_arg("sampling interval must be non-zero"));
        }
        if self.timeout.is_zero() {
            return Err(AnemoError::invalid_arg("timeout must be non-zero"));
        }
        match self.window {
            TimeWindow::Fixed { start, end } if start >= end => {
                return Err(AnemoError::invalid_arg("fixed window start must precede end"));
            }
            TimeWindow::Rolling { lookback } if lookback.is_zero() => {
                return Err(AnemoError::invalid_arg("rolling window lookback is zero"));
            }
            TimeWindow::Rolling { lookback } if TimeDelta::from_std(lookback).is_err() => {
                return Err(AnemoError::invalid_arg("rolling window lookback too large"));
            }
            _ => {}
        }
        for level in WindLevel::ALL {
            if !self.fallback.for_level(level).is_valid() {
                return Err(AnemoError::invalid_arg(format!(
                    "invalid fallback range for {} m",
                    level.height_m()
                )));
            }
        }
        Ok(())
    }
}

impl Default for WindSeriesConfig {
    fn default() -> Self {
        Self::intraday()
    }
}
