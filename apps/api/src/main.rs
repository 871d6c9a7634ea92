//! Portfolio API entry point.

use portfolio_api::{config::AppConfig, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting {}",
        portfolio_api::SERVICE_NAME
    );

    let config = AppConfig::from_env()?;
    tracing::info!(
        bind = %config.bind_addr(),
        db_host = %config.database.host,
        db_name = %config.database.name,
        url_override = config.database.url.is_some(),
        "Configuration loaded"
    );

    portfolio_api::run(config).await
}
