use anemo::WindSeriesConfig;
use anemo_demos::common::provider_builder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Rolling 7-day window at hourly resolution, every fourth hour kept.
    let provider = provider_builder(WindSeriesConfig::weekly()).build()?;

    let series = provider.fetch_wind_series().await;
    println!(
        "{} {:?} samples, first {:?}",
        series.len(),
        series.provenance(),
        series.samples().first().map(|s| s.timestamp.as_str())
    );
    println!("{}", serde_json::to_string(&series)?);

    Ok(())
}
