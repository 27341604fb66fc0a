use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::{AnemoError, Coordinate, SamplingInterval, WindSeriesConfig};

/// Display label layout for sample timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelFormat {
    /// `HH:MM`, for windows of at most one day.
    Time,
    /// `DD/MM HH:MM`, for multi-day windows.
    DayTime,
}

impl LabelFormat {
    /// Pick the layout for a window: anything longer than 24 hours gets the day prefix.
    #[must_use]
    pub fn for_span(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if end.signed_duration_since(start) > TimeDelta::days(1) {
            Self::DayTime
        } else {
            Self::Time
        }
    }

    /// `strftime` pattern for this layout.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Time => "%H:%M",
            Self::DayTime => "%d/%m %H:%M",
        }
    }
}

/// A request with its window resolved to absolute instants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindRequest {
    /// Window start (inclusive).
    pub start: DateTime<Utc>,
    /// Window end (inclusive).
    pub end: DateTime<Utc>,
    /// Provider sampling interval.
    pub interval: SamplingInterval,
    /// Point to sample.
    pub coordinate: Coordinate,
}

impl WindRequest {
    /// Resolve `cfg`'s window policy against `now`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the window cannot be resolved.
    pub fn resolve(cfg: &WindSeriesConfig, now: DateTime<Utc>) -> Result<Self, AnemoError> {
        let (start, end) = cfg.window.resolve(now)?;
        Ok(Self {
            start,
            end,
            interval: cfg.interval,
            coordinate: cfg.coordinate,
        })
    }

    /// Label layout implied by the window span.
    #[must_use]
    pub fn label_format(&self) -> LabelFormat {
        LabelFormat::for_span(self.start, self.end)
    }

    /// Number of readings per level a complete response would hold, endpoints included.
    #[must_use]
    pub fn expected_readings(&self) -> usize {
        let minutes = i64::from(self.interval.minutes());
        if minutes == 0 {
            return 0;
        }
        let span = self.end.signed_duration_since(self.start).num_minutes();
        if span < 0 {
            return 0;
        }
        usize::try_from(span / minutes).map_or(usize::MAX, |n| n.saturating_add(1))
    }
}
