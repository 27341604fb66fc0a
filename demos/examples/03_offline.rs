use std::time::Duration;

use anemo::{Tz, WindSeriesConfig, WindSeriesProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // No network at all: remote disabled, seeded so every run prints the same values.
    let provider = WindSeriesProvider::builder()
        .config(WindSeriesConfig::intraday())
        .remote_enabled(false)
        .synthetic_seed(42)
        .label_tz(Tz::America__Argentina__Ushuaia)
        .timeout(Duration::from_secs(5))
        .build()?;

    for sample in provider.fetch_samples().await {
        println!(
            "{:>5}  2m {:>4.1}  10m {:>4.1}  100m {:>4.1}",
            sample.timestamp, sample.speed_at_2m, sample.speed_at_10m, sample.speed_at_100m
        );
    }

    Ok(())
}
