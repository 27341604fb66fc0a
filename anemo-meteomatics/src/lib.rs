//! anemo-meteomatics
//!
//! Public connector that implements `WindSource` on top of the Meteomatics
//! JSON time-series API. One authenticated `GET` per call, no retries.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;
mod credentials;
/// URL construction for time-series requests.
pub mod query;
/// Wire format of the time-series response.
pub mod wire;

use std::sync::Arc;

use adapter::{MmTimeseries, RealAdapter};
use anemo_core::{AnemoError, WindReadings, WindRequest, WindSource};
use async_trait::async_trait;

pub use builder::MeteomaticsConnectorBuilder;
pub use credentials::Credentials;
pub use query::DEFAULT_BASE_URL;

#[cfg(feature = "test-adapters")]
type TimeseriesAdapter = Arc<dyn MmTimeseries>;
#[cfg(not(feature = "test-adapters"))]
type TimeseriesAdapter = Arc<RealAdapter>;

/// Public connector type. Production users construct it with
/// [`MeteomaticsConnector::from_env`] or [`MeteomaticsConnector::builder`].
pub struct MeteomaticsConnector {
    timeseries: TimeseriesAdapter,
}

impl MeteomaticsConnector {
    /// Connector name used in logs.
    pub const NAME: &'static str = "anemo-meteomatics";

    /// Start configuring a connector.
    #[must_use]
    pub fn builder() -> MeteomaticsConnectorBuilder {
        MeteomaticsConnectorBuilder::new()
    }

    /// Build against the public endpoint with credentials from the environment.
    ///
    /// # Errors
    /// Returns `MissingCredentials` if `METEOMATICS_USER` or `METEOMATICS_PASS` is unset.
    pub fn from_env() -> Result<Self, AnemoError> {
        Self::builder().build()
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_adapter(adapter: Arc<dyn MmTimeseries>) -> Self {
        Self {
            timeseries: adapter,
        }
    }

    /// Build from a concrete `RealAdapter`.
    #[must_use]
    pub fn from_real_adapter(adapter: RealAdapter) -> Self {
        Self {
            timeseries: Arc::new(adapter),
        }
    }
}

#[async_trait]
impl WindSource for MeteomaticsConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Meteomatics"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "anemo_meteomatics::wind_readings",
            skip(self, req),
            fields(start = %req.start, end = %req.end, interval = req.interval.minutes()),
        )
    )]
    async fn wind_readings(&self, req: &WindRequest) -> Result<WindReadings, AnemoError> {
        let raw = self.timeseries.fetch(req).await?;
        let readings = raw.into_readings()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            readings = readings.aligned_len(),
            expected = req.expected_readings(),
            "meteomatics response parsed"
        );
        Ok(readings)
    }
}
