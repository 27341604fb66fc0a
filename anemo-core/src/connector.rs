use async_trait::async_trait;

use crate::{AnemoError, WindReadings, WindRequest};

/// A provider of raw wind readings for a resolved request.
///
/// Implementations perform at most one upstream call per invocation and
/// report every failure as an `AnemoError`; deciding what to do about a
/// failure is left to the caller.
#[async_trait]
pub trait WindSource: Send + Sync {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Human-readable name of the data vendor.
    fn vendor(&self) -> &'static str;

    /// Fetch readings for all three levels over the request window.
    async fn wind_readings(&self, req: &WindRequest) -> Result<WindReadings, AnemoError>;
}
