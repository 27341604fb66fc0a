//! anemo-core
//!
//! Core types, the source trait, and series utilities shared across the anemo crates.
//!
//! - `types`: re-exports of the data model and configuration from `anemo-types`.
//! - `request`: resolving a configuration into an absolute request window.
//! - `readings`: raw per-level provider readings.
//! - `connector`: the `WindSource` trait implemented by providers and mocks.
//! - `timeseries`: zipping, downsampling, and labelling readings into samples.
//! - `synthetic`: placeholder series used when the live path is unavailable.
#![warn(missing_docs)]

/// The `WindSource` trait implemented by remote providers and mocks.
pub mod connector;
/// Raw per-level readings returned by a source.
pub mod readings;
/// Absolute request windows and label formats.
pub mod request;
/// Synthetic series generation.
pub mod synthetic;
/// Normalization, downsampling, and label helpers.
pub mod timeseries;
pub mod types;

pub use connector::WindSource;
pub use readings::{Reading, WindReadings};
pub use request::{LabelFormat, WindRequest};
pub use synthetic::synthetic_series;
pub use timeseries::downsample::downsample;
pub use timeseries::label::format_label;
pub use timeseries::normalize::{normalize, zip_levels};
pub use types::*;
