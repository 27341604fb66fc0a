use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AnemoError, WindLevel};

/// One provider value at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Instant the value applies to.
    pub at: DateTime<Utc>,
    /// Wind speed in m/s as reported by the provider.
    pub value: f64,
}

impl Reading {
    /// Construct a reading.
    #[must_use]
    pub const fn new(at: DateTime<Utc>, value: f64) -> Self {
        Self { at, value }
    }
}

/// Raw readings for all three levels, aligned by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindReadings {
    at_2m: Vec<Reading>,
    at_10m: Vec<Reading>,
    at_100m: Vec<Reading>,
}

impl WindReadings {
    /// Construct from the three level series.
    #[must_use]
    pub const fn new(at_2m: Vec<Reading>, at_10m: Vec<Reading>, at_100m: Vec<Reading>) -> Self {
        Self {
            at_2m,
            at_10m,
            at_100m,
        }
    }

    /// Assemble from `(level, readings)` pairs in any order.
    ///
    /// # Errors
    /// Returns `MalformedResponse` if a level is missing or appears twice.
    pub fn from_levels<I>(levels: I) -> Result<Self, AnemoError>
    where
        I: IntoIterator<Item = (WindLevel, Vec<Reading>)>,
    {
        let mut slots: [Option<Vec<Reading>>; 3] = [None, None, None];
        for (level, readings) in levels {
            let slot = &mut slots[Self::slot(level)];
            if slot.is_some() {
                return Err(AnemoError::malformed(format!(
                    "duplicate series for {}",
                    level.parameter()
                )));
            }
            *slot = Some(readings);
        }
        let [at_2m, at_10m, at_100m] = slots;
        let missing = |level: WindLevel| {
            AnemoError::malformed(format!("missing series for {}", level.parameter()))
        };
        Ok(Self {
            at_2m: at_2m.ok_or_else(|| missing(WindLevel::M2))?,
            at_10m: at_10m.ok_or_else(|| missing(WindLevel::M10))?,
            at_100m: at_100m.ok_or_else(|| missing(WindLevel::M100))?,
        })
    }

    const fn slot(level: WindLevel) -> usize {
        match level {
            WindLevel::M2 => 0,
            WindLevel::M10 => 1,
            WindLevel::M100 => 2,
        }
    }

    /// Readings for one level.
    #[must_use]
    pub fn level(&self, level: WindLevel) -> &[Reading] {
        match level {
            WindLevel::M2 => &self.at_2m,
            WindLevel::M10 => &self.at_10m,
            WindLevel::M100 => &self.at_100m,
        }
    }

    /// Length of the shortest level series, i.e. the number of zippable triples.
    #[must_use]
    pub fn aligned_len(&self) -> usize {
        self.at_2m
            .len()
            .min(self.at_10m.len())
            .min(self.at_100m.len())
    }
}
