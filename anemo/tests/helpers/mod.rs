#![allow(dead_code)]

use anemo::{FallbackRanges, WeatherSample, WindLevel};
use anemo_core::{Reading, WindReadings};
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::{Value, json};

/// Fixed "now" used by every test: midnight UTC, so intraday labels start at 00:00.
pub fn now() -> DateTime<Utc> {
    "2024-06-02T00:00:00Z".parse().unwrap()
}

pub fn value(level: WindLevel, i: usize) -> f64 {
    f64::from(level.height_m()) / 10.0 + i as f64 * 0.5
}

/// `n` readings per level, `step_min` apart from `start`.
pub fn readings(start: DateTime<Utc>, step_min: i64, n: usize) -> WindReadings {
    let level = |level: WindLevel| {
        (0..n)
            .map(|i| Reading::new(start + TimeDelta::minutes(step_min * i as i64), value(level, i)))
            .collect()
    };
    WindReadings::new(
        level(WindLevel::M2),
        level(WindLevel::M10),
        level(WindLevel::M100),
    )
}

/// Meteomatics body with `n` 20-minute readings from `start` for `levels`.
pub fn mm_body(levels: &[WindLevel], start: DateTime<Utc>, n: usize) -> Value {
    let data: Vec<Value> = levels
        .iter()
        .map(|level| {
            let dates: Vec<Value> = (0..n)
                .map(|i| {
                    json!({
                        "date": (start + TimeDelta::minutes(20 * i as i64)).to_rfc3339(),
                        "value": value(*level, i),
                    })
                })
                .collect();
            json!({
                "parameter": level.parameter(),
                "coordinates": [ { "lat": -63.3215, "lon": -58.902, "dates": dates } ],
            })
        })
        .collect();
    json!({ "status": "OK", "data": data })
}

pub fn assert_within_fallback(samples: &[WeatherSample], ranges: &FallbackRanges) {
    for s in samples {
        for level in WindLevel::ALL {
            let v = s.speed(level);
            assert!(
                ranges.for_level(level).contains(v),
                "{v} outside fallback range at {} m",
                level.height_m()
            );
            assert_eq!((v * 10.0).round() / 10.0, v, "{v} not rounded to one decimal");
        }
    }
}

pub fn hourly_labels() -> Vec<String> {
    (0..24).map(|h| format!("{h:02}:00")).collect()
}
