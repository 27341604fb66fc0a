use anemo::WindSeriesConfig;
use anemo_demos::common::provider_builder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Last 24 hours at 20-minute resolution, one point per hour.
    let provider = provider_builder(WindSeriesConfig::intraday()).build()?;

    // 2. Fetch. This never fails; a failed fetch comes back synthetic.
    let series = provider.fetch_wind_series().await;

    // 3. Report where the values came from, then the samples as JSON.
    println!("provenance: {:?}", series.provenance());
    if let Some(reason) = series.fallback_reason() {
        println!("fallback reason: {reason:?}");
    }
    println!("{}", serde_json::to_string_pretty(series.samples())?);

    Ok(())
}
