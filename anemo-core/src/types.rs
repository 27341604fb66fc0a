//! Re-export of the data model and configuration from `anemo-types`.
// Consolidated so downstream crates can depend on `anemo-core` only

pub use anemo_types::{AnemoError, FallbackReason, Provenance, WeatherSample, WindLevel, WindSeries};
pub use anemo_types::{
    Coordinate, FallbackRanges, SamplingInterval, SpeedRange, TimeWindow, WindSeriesConfig,
};

pub use chrono_tz::Tz;
