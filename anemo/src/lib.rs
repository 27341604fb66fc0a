//! anemo produces a wind-speed series at 2 m, 10 m and 100 m for one site.
//!
//! Overview
//! - Asks a [`WindSource`] (normally the Meteomatics connector) for raw
//!   readings over a resolved time window, bounded by a timeout.
//! - Normalizes the readings into ordered, labelled [`WeatherSample`]s and
//!   downsamples them by a stride to a bounded length.
//! - Falls back to a synthetic series on any failure, or when remote fetching
//!   is disabled. Callers never see an error; the returned [`WindSeries`]
//!   says which path produced it.
//!
//! Building a provider and fetching the last 24 hours:
//! ```rust,ignore
//! use std::sync::Arc;
//! use anemo::{WindSeriesConfig, WindSeriesProvider};
//! use anemo_meteomatics::MeteomaticsConnector;
//!
//! let source = Arc::new(MeteomaticsConnector::from_env()?);
//! let provider = WindSeriesProvider::builder()
//!     .with_source(source)
//!     .config(WindSeriesConfig::intraday())
//!     .build()?;
//!
//! let series = provider.fetch_wind_series().await;
//! if !series.is_live() {
//!     // render with a "simulated data" badge
//! }
//! ```
//!
//! See the `demos` crate for runnable programs.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Clock, WindSeriesProvider, WindSeriesProviderBuilder};

// Re-export the data model for convenience
pub use anemo_core::{
    AnemoError, Coordinate, FallbackRanges, FallbackReason, Provenance, SamplingInterval,
    SpeedRange, TimeWindow, Tz, WeatherSample, WindLevel, WindSeries, WindSeriesConfig,
    WindSource,
};
