use std::sync::Arc;
use std::time::Duration;

use anemo::{
    AnemoError, FallbackReason, Provenance, SamplingInterval, TimeWindow, WindLevel, WindSeries,
    WindSeriesConfig, WindSeriesProvider,
};
use anemo_core::{Coordinate, WindRequest};
use anemo_mock::{DynamicMockSource, MockBehavior, MockWindSource};
use chrono::{DateTime, TimeDelta, Utc};

mod helpers;
use helpers::now;

#[tokio::test]
async fn intraday_downsamples_every_third_reading() {
    let (source, controller) = DynamicMockSource::new_with_controller("scripted");
    let start = now() - TimeDelta::hours(24);
    controller
        .set_behavior(MockBehavior::Return(helpers::readings(start, 20, 72)))
        .await;

    let provider = WindSeriesProvider::builder()
        .with_source(source)
        .with_clock(now)
        .build()
        .unwrap();
    let series = provider.fetch_wind_series().await;

    assert_eq!(series.provenance(), Provenance::Live);
    let samples = series.samples();
    assert_eq!(samples.len(), 24);
    let labels: Vec<String> = samples.iter().map(|s| s.timestamp.clone()).collect();
    assert_eq!(labels, helpers::hourly_labels());
    for (k, s) in samples.iter().enumerate() {
        assert_eq!(s.at, start + TimeDelta::hours(k as i64));
        for level in WindLevel::ALL {
            assert_eq!(s.speed(level), helpers::value(level, 3 * k));
        }
    }
}

#[tokio::test]
async fn weekly_window_requests_last_seven_days_hourly() {
    let (source, controller) = DynamicMockSource::new_with_controller("scripted");
    let start = now() - TimeDelta::days(7);
    controller
        .set_behavior(MockBehavior::Return(helpers::readings(start, 60, 169)))
        .await;

    let provider = WindSeriesProvider::builder()
        .with_source(source)
        .config(WindSeriesConfig::weekly())
        .with_clock(now)
        .build()
        .unwrap();
    let series = provider.fetch_wind_series().await;

    let expected = WindRequest {
        start,
        end: now(),
        interval: SamplingInterval::HOURLY,
        coordinate: Coordinate::HABITAT_SITE,
    };
    assert_eq!(controller.requests().await, vec![expected]);

    assert!(series.is_live());
    let samples = series.samples();
    assert_eq!(samples.len(), 42);
    assert_eq!(samples[0].timestamp, "26/05 00:00");
    assert_eq!(samples[1].timestamp, "26/05 04:00");
    assert_eq!(samples[41].at, start + TimeDelta::hours(4 * 41));
}

#[tokio::test]
async fn disabled_remote_issues_no_request() {
    let (source, controller) = DynamicMockSource::new_with_controller("scripted");
    controller
        .set_behavior(MockBehavior::Return(helpers::readings(now(), 20, 72)))
        .await;

    let provider = WindSeriesProvider::builder()
        .with_source(source)
        .remote_enabled(false)
        .with_clock(now)
        .build()
        .unwrap();
    let series = provider.fetch_wind_series().await;

    assert!(controller.requests().await.is_empty());
    match &series {
        WindSeries::Synthetic { samples, reason } => {
            assert_eq!(*reason, FallbackReason::Disabled);
            assert_eq!(samples.len(), 24);
            let labels: Vec<String> = samples.iter().map(|s| s.timestamp.clone()).collect();
            assert_eq!(labels, helpers::hourly_labels());
            helpers::assert_within_fallback(samples, &provider.config().fallback);
        }
        WindSeries::Live(_) => panic!("remote is disabled"),
    }
}

#[tokio::test]
async fn disabled_remote_needs_no_source() {
    let provider = WindSeriesProvider::builder()
        .remote_enabled(false)
        .build()
        .expect("no source required");
    assert_eq!(provider.fetch_samples().await.len(), 24);
}

#[tokio::test]
async fn source_error_falls_back_with_reason() {
    let provider = WindSeriesProvider::builder()
        .with_source(Arc::new(MockWindSource::failing(AnemoError::transport(
            "connection reset",
        ))))
        .with_clock(now)
        .build()
        .unwrap();
    let series = provider.fetch_wind_series().await;

    assert_eq!(
        series.fallback_reason(),
        Some(&FallbackReason::Failed(AnemoError::transport(
            "connection reset"
        )))
    );
    assert_eq!(series.len(), 24);
    helpers::assert_within_fallback(series.samples(), &provider.config().fallback);
}

#[tokio::test(start_paused = true)]
async fn hanging_source_times_out_into_fallback() {
    let (source, controller) = DynamicMockSource::new_with_controller("scripted");
    controller.set_behavior(MockBehavior::Hang).await;

    let provider = WindSeriesProvider::builder()
        .with_source(source)
        .with_clock(now)
        .build()
        .unwrap();
    let series = provider.fetch_wind_series().await;

    assert_eq!(
        series.fallback_reason(),
        Some(&FallbackReason::Failed(AnemoError::Timeout { after_ms: 10_000 }))
    );
    assert_eq!(series.len(), 24);
}

#[tokio::test]
async fn misaligned_levels_fall_back() {
    let (source, controller) = DynamicMockSource::new_with_controller("scripted");
    let start = now() - TimeDelta::hours(24);
    let good = helpers::readings(start, 20, 72);
    let shifted = helpers::readings(start + TimeDelta::minutes(5), 20, 72);
    let broken = anemo_core::WindReadings::new(
        good.level(WindLevel::M2).to_vec(),
        shifted.level(WindLevel::M10).to_vec(),
        good.level(WindLevel::M100).to_vec(),
    );
    controller.set_behavior(MockBehavior::Return(broken)).await;

    let provider = WindSeriesProvider::builder()
        .with_source(source)
        .with_clock(now)
        .build()
        .unwrap();
    let series = provider.fetch_wind_series().await;

    assert!(matches!(
        series.fallback_reason(),
        Some(FallbackReason::Failed(AnemoError::MalformedResponse(_)))
    ));
}

#[tokio::test]
async fn fixture_source_yields_live_series() {
    let provider = WindSeriesProvider::builder()
        .with_source(Arc::new(MockWindSource::new()))
        .with_clock(now)
        .build()
        .unwrap();
    let samples = provider.fetch_samples().await;
    assert_eq!(samples.len(), 24);
    assert!(samples.windows(2).all(|w| w[0].at < w[1].at));
    assert_eq!(
        samples[15].speed(WindLevel::M10),
        anemo_mock::diurnal(WindLevel::M10, samples[15].at)
    );
}

#[tokio::test]
async fn seeded_fallback_repeats_across_calls() {
    let provider = WindSeriesProvider::builder()
        .remote_enabled(false)
        .synthetic_seed(7)
        .with_clock(now)
        .build()
        .unwrap();
    let a = provider.fetch_wind_series().await;
    let b = provider.fetch_wind_series().await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn fixed_window_is_used_verbatim() {
    let (source, controller) = DynamicMockSource::new_with_controller("scripted");
    let start: DateTime<Utc> = "2023-01-01T00:00:00Z".parse().unwrap();
    let end: DateTime<Utc> = "2023-01-01T06:00:00Z".parse().unwrap();
    controller
        .set_behavior(MockBehavior::Return(helpers::readings(start, 20, 19)))
        .await;

    let cfg = WindSeriesConfig {
        window: TimeWindow::Fixed { start, end },
        ..WindSeriesConfig::intraday()
    };
    let provider = WindSeriesProvider::builder()
        .with_source(source)
        .config(cfg)
        .build()
        .unwrap();
    let samples = provider.fetch_samples().await;

    let requests = controller.requests().await;
    assert_eq!((requests[0].start, requests[0].end), (start, end));
    // 19 readings, every third: indices 0, 3, ..., 18
    assert_eq!(samples.len(), 7);
    assert_eq!(samples[6].timestamp, "06:00");
}

#[tokio::test]
async fn short_window_fallback_matches_live_length() {
    let start: DateTime<Utc> = "2023-01-01T00:00:00Z".parse().unwrap();
    let end: DateTime<Utc> = "2023-01-01T06:00:00Z".parse().unwrap();
    let cfg = WindSeriesConfig {
        window: TimeWindow::Fixed { start, end },
        ..WindSeriesConfig::intraday()
    };

    let (source, controller) = DynamicMockSource::new_with_controller("scripted");
    controller
        .set_behavior(MockBehavior::Return(helpers::readings(start, 20, 19)))
        .await;
    let live = WindSeriesProvider::builder()
        .with_source(source)
        .config(cfg.clone())
        .build()
        .unwrap()
        .fetch_wind_series()
        .await;

    let synthetic = WindSeriesProvider::builder()
        .with_source(Arc::new(MockWindSource::failing(AnemoError::rejected(500))))
        .config(cfg)
        .build()
        .unwrap()
        .fetch_wind_series()
        .await;

    assert!(live.is_live());
    assert!(!synthetic.is_live());
    assert_eq!(synthetic.len(), live.len());
    let at = |s: &WindSeries| s.samples().iter().map(|x| x.at).collect::<Vec<_>>();
    assert_eq!(at(&synthetic), at(&live));
    assert!(synthetic.samples().iter().all(|s| s.at <= end));
}

#[test]
fn builder_requires_a_source_when_remote_enabled() {
    let err = WindSeriesProvider::builder().build().err().expect("no source");
    assert!(matches!(err, AnemoError::InvalidArg(_)));
}

#[test]
fn builder_rejects_invalid_config() {
    let cfg = WindSeriesConfig {
        stride: 0,
        ..WindSeriesConfig::intraday()
    };
    let err = WindSeriesProvider::builder()
        .with_source(Arc::new(MockWindSource::new()))
        .config(cfg)
        .build()
        .err()
        .expect("stride 0");
    assert!(matches!(err, AnemoError::InvalidArg(_)));

    let err = WindSeriesProvider::builder()
        .with_source(Arc::new(MockWindSource::new()))
        .timeout(Duration::ZERO)
        .build()
        .err()
        .expect("zero timeout");
    assert!(matches!(err, AnemoError::InvalidArg(_)));
}
