use anemo::WindSeriesConfig;
use anemo_demos::common::provider_builder;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,anemo=trace,anemo_meteomatics=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let provider = provider_builder(WindSeriesConfig::intraday()).build()?;

    let series = provider.fetch_wind_series().await;
    tracing::info!(
        provenance = ?series.provenance(),
        samples = series.len(),
        "fetched intraday series"
    );

    let weekly = provider_builder(WindSeriesConfig::weekly()).build()?;
    let _ = weekly.fetch_wind_series().await;

    Ok(())
}
