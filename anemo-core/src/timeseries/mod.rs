//! Series utilities shared by the orchestrator and tests.
//!
//! Modules include:
//! - `normalize`: zip per-level readings into complete samples
//! - `downsample`: thin a dense series to the display cadence
//! - `label`: render sample instants as display labels
/// Stride/truncate helpers.
pub mod downsample;
/// Timestamp label rendering.
pub mod label;
/// Zipping raw readings into samples.
pub mod normalize;
