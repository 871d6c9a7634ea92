//! # Portfolio API
//!
//! HTTP service exposing create/read/update/delete over items stored in
//! PostgreSQL.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Portfolio API Server                            │
//! │                                                                         │
//! │  ┌────────────────┐  ┌──────────────────────────────────────────────┐  │
//! │  │  meta routes   │  │  item routes                                 │  │
//! │  │                │  │                                              │  │
//! │  │ • GET /        │  │ • POST   /items         create               │  │
//! │  │ • GET /health  │  │ • GET    /items         list (skip, limit)   │  │
//! │  │                │  │ • GET    /items/{id}    read                 │  │
//! │  │ no database    │  │ • PUT    /items/{id}    partial update       │  │
//! │  └────────────────┘  │ • DELETE /items/{id}    delete               │  │
//! │                      └──────────────────┬───────────────────────────┘  │
//! │                                         │ one Session per request      │
//! │  ┌──────────────────────────────────────▼───────────────────────────┐  │
//! │  │                  AppState { db: Database }                        │  │
//! │  │         built once in `run`, injected with `with_state`           │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HOST` / `PORT` - listener address (default: 0.0.0.0:8080)
//! - `DATABASE_URL` - full connection string, overrides the `DB_*` parts
//! - `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USERNAME` - connection parts
//! - `DB_PASSWORD_SSM_PARAM` - SSM parameter holding the password
//! - `DB_PASSWORD` - password, used when no SSM parameter is set
//! - `DB_MAX_CONNECTIONS`, `DB_ACQUIRE_TIMEOUT_SECS` - pool tuning
//! - `AUTO_CREATE_SCHEMA` - create the items table at startup (default: true)
//! - `RUST_LOG` - log filter

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod secrets;
pub mod telemetry;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use portfolio_db::{Database, DbConfig};

// Re-exports
pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use routes::build_app;

/// Service title reported by the root endpoint.
pub const SERVICE_NAME: &str = "Portfolio API";

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Turns the database settings into a pool configuration, fetching the
/// password first when needed.
pub async fn database_config(config: &AppConfig) -> anyhow::Result<DbConfig> {
    let settings = &config.database;

    let password = if settings.needs_password() {
        let store = match &settings.password {
            config::PasswordSource::Ssm { .. } => {
                Some(secrets::SsmSecretStore::from_env(settings.aws_region.clone()).await)
            }
            _ => None,
        };
        let store = store.as_ref().map(|s| s as &dyn secrets::SecretStore);

        secrets::resolve_password(&settings.password, store)
            .await
            .context("resolving database password")?
    } else {
        String::new()
    };

    settings
        .to_db_config(&password)
        .context("building database configuration")
}

/// Runs the server until Ctrl+C / SIGTERM.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db_config = database_config(&config).await?;
    info!(
        url = %db_config.redacted_url(),
        max_connections = db_config.max_connections,
        "Database configuration resolved"
    );

    let db = Database::connect(db_config)
        .await
        .context("connecting to database")?;

    match db.session().await {
        Ok(mut session) => match session.items().count().await {
            Ok(count) => info!(count, "Connected to database"),
            Err(e) => error!(error = %e, "Item count failed"),
        },
        Err(e) => error!(error = %e, "Database session check failed"),
    }

    let app = build_app(AppState::new(db.clone()));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
