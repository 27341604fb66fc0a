#![allow(dead_code)]

use anemo_core::{Coordinate, SamplingInterval, WindLevel, WindRequest};
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::{Value, json};

pub const DAY_PATH: &str = "/2024-06-01T00:00:00Z--2024-06-02T00:00:00Z:PT20M/\
                            wind_speed_2m:ms,wind_speed_10m:ms,wind_speed_100m:ms/\
                            -63.3215,-58.902/json";

pub fn t0() -> DateTime<Utc> {
    "2024-06-01T00:00:00Z".parse().unwrap()
}

pub fn day_request() -> WindRequest {
    WindRequest {
        start: t0(),
        end: t0() + TimeDelta::hours(24),
        interval: SamplingInterval::TWENTY_MINUTES,
        coordinate: Coordinate::HABITAT_SITE,
    }
}

/// Value reported for `level` at index `i`.
pub fn value(level: WindLevel, i: usize) -> f64 {
    f64::from(level.height_m()) / 10.0 + i as f64 * 0.25
}

/// A time-series body with `n` readings every 20 minutes for the given levels.
pub fn body_for(levels: &[WindLevel], n: usize) -> Value {
    let data: Vec<Value> = levels
        .iter()
        .map(|level| {
            let dates: Vec<Value> = (0..n)
                .map(|i| {
                    let at = t0() + TimeDelta::minutes(20 * i as i64);
                    json!({ "date": at.to_rfc3339(), "value": value(*level, i) })
                })
                .collect();
            json!({
                "parameter": level.parameter(),
                "coordinates": [ { "lat": -63.3215, "lon": -58.902, "dates": dates } ],
            })
        })
        .collect();
    json!({
        "version": "3.0",
        "user": "habitat",
        "dateGenerated": "2024-06-02T00:00:05Z",
        "status": "OK",
        "data": data,
    })
}

pub fn body(n: usize) -> Value {
    body_for(&WindLevel::ALL, n)
}
