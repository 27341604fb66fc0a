use std::time::Duration;

use anemo_core::{
    AnemoError, LabelFormat, SamplingInterval, TimeWindow, Tz, WindRequest, WindSeriesConfig,
    format_label,
};
use chrono::{DateTime, TimeDelta, Utc};

fn now() -> DateTime<Utc> {
    "2024-09-15T10:20:00Z".parse().unwrap()
}

#[test]
fn weekly_preset_spans_exactly_seven_days_to_now() {
    let req = WindRequest::resolve(&WindSeriesConfig::weekly(), now()).unwrap();
    assert_eq!(req.end, now());
    assert_eq!(req.start, now() - TimeDelta::days(7));
    assert_eq!(req.interval, SamplingInterval::HOURLY);
    assert_eq!(req.label_format(), LabelFormat::DayTime);
    assert_eq!(req.expected_readings(), 7 * 24 + 1);
}

#[test]
fn intraday_preset_uses_time_only_labels() {
    let req = WindRequest::resolve(&WindSeriesConfig::intraday(), now()).unwrap();
    assert_eq!(req.start, now() - TimeDelta::hours(24));
    assert_eq!(req.label_format(), LabelFormat::Time);
    assert_eq!(req.expected_readings(), 73);
}

#[test]
fn fixed_window_ignores_now() {
    let start: DateTime<Utc> = "2023-01-01T00:00:00Z".parse().unwrap();
    let end: DateTime<Utc> = "2023-12-30T00:00:00Z".parse().unwrap();
    let mut cfg = WindSeriesConfig::intraday();
    cfg.window = TimeWindow::Fixed { start, end };

    let req = WindRequest::resolve(&cfg, now()).unwrap();
    assert_eq!((req.start, req.end), (start, end));
    assert_eq!(req.label_format(), LabelFormat::DayTime);
}

#[test]
fn zero_lookback_is_rejected() {
    let mut cfg = WindSeriesConfig::intraday();
    cfg.window = TimeWindow::Rolling {
        lookback: Duration::ZERO,
    };
    assert!(matches!(
        WindRequest::resolve(&cfg, now()),
        Err(AnemoError::InvalidArg(_))
    ));
}

#[test]
fn labels_follow_documented_layouts() {
    let at: DateTime<Utc> = "2024-02-03T04:05:00Z".parse().unwrap();
    assert_eq!(format_label(at, Tz::UTC, LabelFormat::Time), "04:05");
    assert_eq!(format_label(at, Tz::UTC, LabelFormat::DayTime), "03/02 04:05");
}

#[test]
fn labels_render_in_configured_zone() {
    let at: DateTime<Utc> = "2024-07-01T23:30:00Z".parse().unwrap();
    // Madrid is UTC+2 in summer, which also rolls the day over.
    assert_eq!(
        format_label(at, chrono_tz::Europe::Madrid, LabelFormat::DayTime),
        "02/07 01:30"
    );
}

#[test]
fn request_serializes_for_diagnostics() {
    let req = WindRequest::resolve(&WindSeriesConfig::weekly(), now()).unwrap();
    let v = serde_json::to_value(req).unwrap();
    assert_eq!(v["interval"], 60);
    assert!(v["start"].as_str().unwrap().starts_with("2024-09-08T10:20:00"));
}
