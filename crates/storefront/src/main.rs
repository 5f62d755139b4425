use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::utils::{LogOptions, Telemetry, init_logger};
use storefront::{config::Config, handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::new("storefront", config.otel_endpoint.clone());
    let providers = telemetry
        .install()
        .context("Failed to set up OpenTelemetry")?;

    let _log_guard = init_logger(providers.logger(), &LogOptions::from_env("storefront"));

    let port = config.port;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("Storefront started against {}", config.api_base_url);

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down storefront...");

    providers.shutdown()?;

    Ok(())
}
