#[cfg(feature = "tracing")]
use std::convert::TryFrom;
use std::sync::Arc;
use std::time::Duration;

use anemo_core::{
    AnemoError, FallbackReason, Tz, WeatherSample, WindRequest, WindSeries, WindSeriesConfig,
    WindSource, normalize, synthetic_series,
};
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Source of the current instant used to resolve rolling windows.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Produces wind series from a remote source, with a synthetic fallback.
///
/// Holds no mutable state; share it behind an `Arc` and call it concurrently.
pub struct WindSeriesProvider {
    pub(crate) source: Option<Arc<dyn WindSource>>,
    pub(crate) cfg: WindSeriesConfig,
    pub(crate) clock: Clock,
}

/// Builder for constructing a `WindSeriesProvider` with custom configuration.
pub struct WindSeriesProviderBuilder {
    source: Option<Arc<dyn WindSource>>,
    cfg: WindSeriesConfig,
    clock: Option<Clock>,
}

impl Default for WindSeriesProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WindSeriesProviderBuilder {
    /// Create a new builder with the intraday preset and the system clock.
    ///
    /// A source must be registered via [`Self::with_source`] unless remote
    /// fetching is disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: WindSeriesConfig::default(),
            clock: None,
        }
    }

    /// Register the remote source.
    ///
    /// Registering a second source replaces the first.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn WindSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    ///
    /// Modifiers called afterwards apply on top of it.
    #[must_use]
    pub fn config(mut self, cfg: WindSeriesConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Enable or disable the remote source.
    ///
    /// When disabled, every call returns a synthetic series tagged
    /// `FallbackReason::Disabled` and no request is issued.
    #[must_use]
    pub const fn remote_enabled(mut self, yes: bool) -> Self {
        self.cfg.remote_enabled = yes;
        self
    }

    /// Set the upper bound on a single source call. Expiry triggers the fallback.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Seed the synthetic generator so fallback values repeat across calls.
    #[must_use]
    pub const fn synthetic_seed(mut self, seed: u64) -> Self {
        self.cfg.synthetic_seed = Some(seed);
        self
    }

    /// Render display labels in `tz` instead of UTC.
    #[must_use]
    pub const fn label_tz(mut self, tz: Tz) -> Self {
        self.cfg.label_tz = tz;
        self
    }

    /// Resolve rolling windows against `clock` instead of the system clock.
    #[must_use]
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        let clock: Clock = Arc::new(clock);
        self.clock = Some(clock);
        self
    }

    /// Build the provider.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configuration does not validate, or if
    /// remote fetching is enabled but no source was registered.
    pub fn build(self) -> Result<WindSeriesProvider, AnemoError> {
        self.cfg.validate()?;
        if self.cfg.remote_enabled && self.source.is_none() {
            return Err(AnemoError::invalid_arg(
                "no source registered; add one via with_source(...) or disable remote fetching",
            ));
        }
        let clock: Clock = match self.clock {
            Some(clock) => clock,
            None => Arc::new(Utc::now),
        };
        Ok(WindSeriesProvider {
            source: self.source,
            cfg: self.cfg,
            clock,
        })
    }
}

impl WindSeriesProvider {
    /// Start building a new provider.
    #[must_use]
    pub fn builder() -> WindSeriesProviderBuilder {
        WindSeriesProviderBuilder::new()
    }

    /// The validated configuration this provider runs with.
    #[must_use]
    pub const fn config(&self) -> &WindSeriesConfig {
        &self.cfg
    }

    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "anemo::source_call_with_timeout",
            skip(source_name, timeout, fut),
            fields(
                source = source_name,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, AnemoError>
    where
        Fut: core::future::Future<Output = Result<T, AnemoError>>,
    {
        #[cfg(not(feature = "tracing"))]
        let _ = source_name;
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(AnemoError::timeout(timeout)))
    }

    /// Fetch the configured window and return it tagged with its provenance.
    ///
    /// Never fails: transport errors, non-success statuses, malformed bodies,
    /// timeouts and a disabled remote all produce a synthetic series with the
    /// length and cadence a complete live response would have had, with the
    /// cause in its `FallbackReason`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "anemo::fetch_wind_series",
            skip(self),
            fields(
                interval = %self.cfg.interval.iso8601(),
                stride = self.cfg.stride,
                max_points = self.cfg.max_points,
            ),
        )
    )]
    pub async fn fetch_wind_series(&self) -> WindSeries {
        let now = (self.clock)();
        let req = match WindRequest::resolve(&self.cfg, now) {
            Ok(req) => req,
            Err(e) => {
                // Config was validated at build time, so only extreme clocks land here.
                let req = WindRequest {
                    start: now,
                    end: now,
                    interval: self.cfg.interval,
                    coordinate: self.cfg.coordinate,
                };
                return self.fall_back(&req, FallbackReason::Failed(e));
            }
        };

        let source = match &self.source {
            Some(source) if self.cfg.remote_enabled => source,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::info!("remote source disabled; serving synthetic series");
                return self.fall_back(&req, FallbackReason::Disabled);
            }
        };

        let fetched = Self::source_call_with_timeout(
            source.name(),
            self.cfg.timeout,
            source.wind_readings(&req),
        )
        .await
        .and_then(|readings| {
            normalize(
                &readings,
                &req,
                self.cfg.label_tz,
                self.cfg.stride,
                self.cfg.max_points,
            )
        });

        match fetched {
            Ok(samples) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    source = source.name(),
                    samples = samples.len(),
                    "live wind series"
                );
                WindSeries::Live(samples)
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    source = source.name(),
                    kind = e.kind(),
                    error = %e,
                    "wind source failed; serving synthetic series"
                );
                self.fall_back(&req, FallbackReason::Failed(e))
            }
        }
    }

    /// Like [`Self::fetch_wind_series`], returning only the samples.
    pub async fn fetch_samples(&self) -> Vec<WeatherSample> {
        self.fetch_wind_series().await.into_samples()
    }

    fn fall_back(&self, req: &WindRequest, reason: FallbackReason) -> WindSeries {
        let cfg = &self.cfg;
        let samples = match cfg.synthetic_seed {
            Some(seed) => synthetic_series(
                req,
                cfg.stride,
                cfg.max_points,
                &cfg.fallback,
                cfg.label_tz,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => synthetic_series(
                req,
                cfg.stride,
                cfg.max_points,
                &cfg.fallback,
                cfg.label_tz,
                &mut rand::rng(),
            ),
        };
        WindSeries::Synthetic { samples, reason }
    }
}
