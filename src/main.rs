//! Podgo server entry point.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use podgo::adapters::postgres::{self, PostgresDocumentStore};
use podgo::adapters::{build_app, CatalogAppState, TimedDocumentStore};
use podgo::config::{AppConfig, ConfigError, ServerConfig};
use podgo::domain::catalog::{Episode, Podcast};
use podgo::ports::DocumentStore;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate().map_err(ConfigError::from)?;

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;

    let pool = postgres::connect(&config.database).await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let deadline = config.database.operation_timeout();
    let podcasts: Arc<dyn DocumentStore<Podcast>> = Arc::new(TimedDocumentStore::new(
        Arc::new(PostgresDocumentStore::<Podcast>::new(pool.clone())),
        deadline,
    ));
    let episodes: Arc<dyn DocumentStore<Episode>> = Arc::new(TimedDocumentStore::new(
        Arc::new(PostgresDocumentStore::<Episode>::new(pool.clone())),
        deadline,
    ));

    let app = build_app(CatalogAppState::new(podcasts, episodes), &config.server);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_new(&server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if server.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
