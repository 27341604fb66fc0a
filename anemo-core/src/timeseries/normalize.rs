use chrono_tz::Tz;

use crate::timeseries::{downsample::downsample, label::format_label};
use crate::{AnemoError, LabelFormat, WeatherSample, WindLevel, WindReadings, WindRequest};

// Providers report gaps with negative sentinels (-999, -666).
fn usable(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn is_usable(sample: &WeatherSample) -> bool {
    WindLevel::ALL.iter().all(|l| usable(sample.speed(*l)))
}

// Every aligned triple, gaps included, sorted by instant.
fn zip_aligned(
    readings: &WindReadings,
    tz: Tz,
    format: LabelFormat,
) -> Result<Vec<WeatherSample>, AnemoError> {
    let low = readings.level(WindLevel::M2);
    let mid = readings.level(WindLevel::M10);
    let high = readings.level(WindLevel::M100);

    let mut out = Vec::with_capacity(readings.aligned_len());
    for ((a, b), c) in low.iter().zip(mid).zip(high) {
        if a.at != b.at || a.at != c.at {
            return Err(AnemoError::malformed(format!(
                "misaligned readings at {}: {} / {} / {}",
                out.len(),
                a.at,
                b.at,
                c.at
            )));
        }
        out.push(WeatherSample {
            at: a.at,
            timestamp: format_label(a.at, tz, format),
            speed_at_2m: a.value,
            speed_at_10m: b.value,
            speed_at_100m: c.value,
        });
    }
    out.sort_by_key(|s| s.at);
    Ok(out)
}

fn drop_gaps(mut samples: Vec<WeatherSample>) -> Vec<WeatherSample> {
    #[cfg(feature = "tracing")]
    let before = samples.len();
    samples.retain(is_usable);
    #[cfg(feature = "tracing")]
    {
        let dropped = before - samples.len();
        if dropped > 0 {
            tracing::debug!(dropped, kept = samples.len(), "dropped readings with gap values");
        }
    }
    samples
}

/// Zip the three level series by index into labelled samples.
///
/// Zipping stops at the shortest series. Triples holding an unusable value
/// are dropped; values that survive are copied unchanged. The result is
/// sorted by instant.
///
/// # Errors
/// Returns `MalformedResponse` when the instants at one index disagree
/// across levels.
pub fn zip_levels(
    readings: &WindReadings,
    tz: Tz,
    format: LabelFormat,
) -> Result<Vec<WeatherSample>, AnemoError> {
    zip_aligned(readings, tz, format).map(drop_gaps)
}

/// Full live-path normalization: zip, label, downsample, then drop gaps.
///
/// The stride is applied to source positions, so a gap removes its own slot
/// and leaves the rest of the cadence untouched.
///
/// # Errors
/// Returns `MalformedResponse` if the readings are misaligned or no usable
/// sample remains.
pub fn normalize(
    readings: &WindReadings,
    req: &WindRequest,
    tz: Tz,
    stride: usize,
    max_points: usize,
) -> Result<Vec<WeatherSample>, AnemoError> {
    let rows = zip_aligned(readings, tz, req.label_format())?;
    let samples = drop_gaps(downsample(rows, stride, max_points));
    if samples.is_empty() {
        return Err(AnemoError::malformed("no usable readings in response"));
    }
    Ok(samples)
}
