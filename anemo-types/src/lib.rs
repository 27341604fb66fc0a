//! Data model, configuration primitives, and the error type shared across the anemo crates.
#![warn(missing_docs)]

mod config;
mod error;
mod sample;
mod series;

pub use config::{
    Coordinate, FallbackRanges, SamplingInterval, SpeedRange, TimeWindow, WindSeriesConfig,
};
pub use error::AnemoError;
pub use sample::{WeatherSample, WindLevel};
pub use series::{FallbackReason, Provenance, WindSeries};
