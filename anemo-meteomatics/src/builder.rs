use std::time::Duration;

use anemo_core::AnemoError;
use url::Url;

use crate::adapter::RealAdapter;
use crate::credentials::Credentials;
use crate::query::DEFAULT_BASE_URL;
use crate::MeteomaticsConnector;

/// Builder for [`MeteomaticsConnector`].
///
/// Defaults: public endpoint, credentials from the environment, a fresh
/// `reqwest::Client` without a client-level timeout (the orchestrator
/// bounds each call).
#[derive(Debug, Default)]
pub struct MeteomaticsConnectorBuilder {
    credentials: Option<Credentials>,
    base_url: Option<String>,
    http: Option<reqwest::Client>,
    request_timeout: Option<Duration>,
}

impl MeteomaticsConnectorBuilder {
    /// Create a builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit credentials instead of reading the environment.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Issue requests against `base` instead of the public endpoint.
    #[must_use]
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = Some(base.into());
        self
    }

    /// Reuse an existing HTTP client. Takes precedence over [`Self::request_timeout`].
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Client-level timeout for standalone use without the orchestrator.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// - `MissingCredentials` if none were supplied and the environment lacks them.
    /// - `InvalidArg` if the base URL does not parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<MeteomaticsConnector, AnemoError> {
        let credentials = match self.credentials {
            Some(c) => c,
            None => Credentials::from_env()?,
        };
        let raw_base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base = Url::parse(raw_base)
            .map_err(|e| AnemoError::invalid_arg(format!("base URL {raw_base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(AnemoError::invalid_arg(format!(
                "base URL cannot carry a path: {raw_base}"
            )));
        }

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut b = reqwest::Client::builder();
                if let Some(t) = self.request_timeout {
                    b = b.timeout(t);
                }
                b.build()
                    .map_err(|e| AnemoError::invalid_arg(format!("http client: {e}")))?
            }
        };

        Ok(MeteomaticsConnector::from_real_adapter(RealAdapter::new(
            http,
            base,
            credentials,
        )))
    }
}
