#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use anemo_core::{AnemoError, WindRequest};
use async_trait::async_trait;
use url::Url;

use crate::credentials::Credentials;
use crate::query::timeseries_url;
use crate::wire::TimeseriesResponse;

/// Time-series abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait MmTimeseries: Send + Sync {
    /// Fetch and parse the time-series document for `req`.
    async fn fetch(&self, req: &WindRequest) -> Result<TimeseriesResponse, AnemoError>;
}

/// Real adapter backed by a `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync` and pools connections internally.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    base: Url,
    credentials: Credentials,
}

impl RealAdapter {
    /// Wrap an existing client.
    #[must_use]
    pub const fn new(http: reqwest::Client, base: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base,
            credentials,
        }
    }

    /// Endpoint root requests are issued against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }
}

fn map_reqwest_err(e: &reqwest::Error, context: &str) -> AnemoError {
    if let Some(status) = e.status() {
        return AnemoError::rejected(status.as_u16());
    }
    AnemoError::transport(format!("{context}: {e}"))
}

#[async_trait]
impl MmTimeseries for RealAdapter {
    async fn fetch(&self, req: &WindRequest) -> Result<TimeseriesResponse, AnemoError> {
        let url = timeseries_url(&self.base, req)?;
        let resp = self
            .http
            .get(url)
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .send()
            .await
            .map_err(|e| map_reqwest_err(&e, "send"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AnemoError::rejected(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| map_reqwest_err(&e, "read body"))?;
        TimeseriesResponse::from_body(&body)
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn MmTimeseries {
    /// Build an `MmTimeseries` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn MmTimeseries>
    where
        F: Send + Sync + 'static + Fn(WindRequest) -> Result<TimeseriesResponse, AnemoError>,
    {
        struct FnTimeseries<F>(F);
        #[async_trait]
        impl<F> MmTimeseries for FnTimeseries<F>
        where
            F: Send + Sync + 'static + Fn(WindRequest) -> Result<TimeseriesResponse, AnemoError>,
        {
            async fn fetch(&self, req: &WindRequest) -> Result<TimeseriesResponse, AnemoError> {
                (self.0)(*req)
            }
        }
        Arc::new(FnTimeseries(f))
    }
}
