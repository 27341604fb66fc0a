//! anemo-mock
//!
//! CI-safe wind sources. [`MockWindSource`] answers every request with a
//! deterministic diurnal cycle; [`DynamicMockSource`] defers to a controller
//! so tests can script returns, failures, and hangs.
#![warn(missing_docs)]

use std::time::Duration;

use anemo_core::{AnemoError, WindReadings, WindRequest, WindSource};
use async_trait::async_trait;

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};
pub use fixtures::diurnal;

/// Mock source with deterministic fixture data.
#[derive(Debug, Clone, Default)]
pub struct MockWindSource {
    failure: Option<AnemoError>,
    latency: Option<Duration>,
}

impl MockWindSource {
    /// A source that always succeeds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            failure: None,
            latency: None,
        }
    }

    /// A source that always fails with `err`.
    #[must_use]
    pub const fn failing(err: AnemoError) -> Self {
        Self {
            failure: Some(err),
            latency: None,
        }
    }

    /// Sleep for `latency` before answering; pair with a short orchestrator timeout.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl WindSource for MockWindSource {
    fn name(&self) -> &'static str {
        "anemo-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn wind_readings(&self, req: &WindRequest) -> Result<WindReadings, AnemoError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(fixtures::readings_for(req))
    }
}
