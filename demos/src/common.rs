use std::sync::Arc;

use anemo::{WindSeriesConfig, WindSeriesProvider, WindSeriesProviderBuilder};
use anemo_core::WindSource;
use anemo_meteomatics::MeteomaticsConnector;

/// Return a source for demos.
///
/// Uses the mock when `ANEMO_DEMOS_USE_MOCK` is set. Otherwise connects to
/// Meteomatics with `METEOMATICS_USER` / `METEOMATICS_PASS`, or returns
/// `None` when those are not set.
#[must_use]
pub fn get_source() -> Option<Arc<dyn WindSource>> {
    if std::env::var("ANEMO_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        return Some(Arc::new(anemo_mock::MockWindSource::new()));
    }
    match MeteomaticsConnector::from_env() {
        Ok(connector) => Some(Arc::new(connector)),
        Err(e) => {
            println!("--- ({e}; serving synthetic data) ---");
            None
        }
    }
}

/// Provider builder for `cfg`, with remote fetching switched off when no source is available.
#[must_use]
pub fn provider_builder(cfg: WindSeriesConfig) -> WindSeriesProviderBuilder {
    let builder = WindSeriesProvider::builder().config(cfg);
    match get_source() {
        Some(source) => builder.with_source(source),
        None => builder.remote_enabled(false),
    }
}
