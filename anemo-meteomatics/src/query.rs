use anemo_core::{AnemoError, WindLevel, WindRequest};
use chrono::{DateTime, Utc};
use url::Url;

/// Public API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.meteomatics.com";

fn instant(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Build the time-series URL for `req` under `base`:
/// `{base}/{start}--{end}:{interval}/{parameters}/{lat},{lon}/json`.
///
/// # Errors
/// Returns `InvalidArg` if `base` cannot carry path segments.
pub fn timeseries_url(base: &Url, req: &WindRequest) -> Result<Url, AnemoError> {
    let window = format!(
        "{}--{}:{}",
        instant(req.start),
        instant(req.end),
        req.interval.iso8601()
    );
    let parameters = WindLevel::ALL.map(WindLevel::parameter).join(",");
    let location = format!("{},{}", req.coordinate.lat, req.coordinate.lon);

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| AnemoError::invalid_arg(format!("base URL cannot carry a path: {base}")))?
        .pop_if_empty()
        .extend([window.as_str(), parameters.as_str(), location.as_str(), "json"]);
    Ok(url)
}
