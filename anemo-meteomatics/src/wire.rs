//! Response body of the Meteomatics JSON time-series endpoint.
//!
//! ```json
//! { "status": "OK",
//!   "data": [ { "parameter": "wind_speed_2m:ms",
//!               "coordinates": [ { "lat": -63.3215, "lon": -58.902,
//!                                  "dates": [ { "date": "2023-01-01T00:00:00Z", "value": 6.1 } ] } ] } ] }
//! ```

use anemo_core::{AnemoError, Reading, WindLevel, WindReadings};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesResponse {
    /// Provider status string; `"OK"` on success.
    #[serde(default)]
    pub status: Option<String>,
    /// One entry per requested parameter.
    pub data: Vec<ParameterSeries>,
}

/// Values of one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSeries {
    /// Parameter identifier, e.g. `wind_speed_10m:ms`.
    pub parameter: String,
    /// One entry per requested coordinate.
    pub coordinates: Vec<CoordinateSeries>,
}

/// Values of one parameter at one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSeries {
    /// Latitude echoed by the provider.
    pub lat: f64,
    /// Longitude echoed by the provider.
    pub lon: f64,
    /// Ordered `(date, value)` pairs.
    pub dates: Vec<DatedValue>,
}

/// A single value. `value` is `null` when the provider has no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    /// Instant of the value.
    pub date: DateTime<Utc>,
    /// Value in the parameter's unit.
    pub value: Option<f64>,
}

impl TimeseriesResponse {
    /// Parse a raw body.
    ///
    /// # Errors
    /// Returns `MalformedResponse` if the body is not a time-series document.
    pub fn from_body(body: &str) -> Result<Self, AnemoError> {
        serde_json::from_str(body).map_err(|e| AnemoError::malformed(e.to_string()))
    }

    /// Pick the three wind parameters out of the response.
    ///
    /// Unrequested parameters are ignored. Only the first coordinate of each
    /// parameter is used; `null` values become NaN and are dropped during
    /// normalization.
    ///
    /// # Errors
    /// Returns `MalformedResponse` when the status is not OK, a wind parameter
    /// is missing or duplicated, or a parameter carries no coordinates.
    pub fn into_readings(self) -> Result<WindReadings, AnemoError> {
        if let Some(status) = self
            .status
            .as_deref()
            .filter(|s| !s.eq_ignore_ascii_case("ok"))
        {
            return Err(AnemoError::malformed(format!("provider status {status}")));
        }

        let levels = self
            .data
            .into_iter()
            .filter_map(|p| WindLevel::from_parameter(&p.parameter).map(|level| (level, p)))
            .map(|(level, p)| {
                let coordinate = p.coordinates.into_iter().next().ok_or_else(|| {
                    AnemoError::malformed(format!("no coordinates for {}", p.parameter))
                })?;
                let readings = coordinate
                    .dates
                    .into_iter()
                    .map(|d| Reading::new(d.date, d.value.unwrap_or(f64::NAN)))
                    .collect();
                Ok((level, readings))
            })
            .collect::<Result<Vec<_>, AnemoError>>()?;

        WindReadings::from_levels(levels)
    }
}
