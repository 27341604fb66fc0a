use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use rand::Rng;

use crate::timeseries::label::format_label;
use crate::{FallbackRanges, SpeedRange, WeatherSample, WindLevel, WindRequest};

fn draw<R: Rng + ?Sized>(rng: &mut R, range: SpeedRange) -> f64 {
    let raw = rng.random_range(range.min..=range.max);
    ((raw * 10.0).round() / 10.0).clamp(range.min, range.max)
}

fn nth_instant(start: DateTime<Utc>, step_minutes: i64, i: usize) -> Option<DateTime<Utc>> {
    let offset = i64::try_from(i)
        .ok()
        .and_then(|i| i.checked_mul(step_minutes))
        .and_then(TimeDelta::try_minutes)?;
    start.checked_add_signed(offset)
}

/// Generate a placeholder series shaped like a full live result.
///
/// Produces as many samples as a gap-free live response would: one every
/// `interval * stride` from the request start, never past the request end,
/// and at most `max_points`. Labels use the request's label format. Each
/// speed is drawn independently and uniformly from its level's range and
/// rounded to one decimal.
///
/// `ranges` must be valid (`min <= max`, finite); `WindSeriesConfig::validate`
/// guarantees this for configured ranges.
pub fn synthetic_series<R: Rng + ?Sized>(
    req: &WindRequest,
    stride: usize,
    max_points: usize,
    ranges: &FallbackRanges,
    tz: Tz,
    rng: &mut R,
) -> Vec<WeatherSample> {
    let format = req.label_format();
    let points = max_points.min(req.expected_readings().div_ceil(stride.max(1)));
    let step_minutes = i64::from(req.interval.minutes())
        .saturating_mul(i64::try_from(stride.max(1)).unwrap_or(i64::MAX));

    (0..points)
        .map_while(|i| nth_instant(req.start, step_minutes, i))
        .map(|at| WeatherSample {
            at,
            timestamp: format_label(at, tz, format),
            speed_at_2m: draw(&mut *rng, ranges.for_level(WindLevel::M2)),
            speed_at_10m: draw(&mut *rng, ranges.for_level(WindLevel::M10)),
            speed_at_100m: draw(&mut *rng, ranges.for_level(WindLevel::M100)),
        })
        .collect()
}
