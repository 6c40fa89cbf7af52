// Framework bootstrap for the media lake service.

use crate::frameworks::config::{Settings, StorageBackend};
use crate::frameworks::db;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::stores::{InMemoryMediaAssetStore, PostgresMediaAssetStore};

use std::io::{Error, Result};
use std::sync::Arc;

// Logging is configured before Settings are read so config errors are reported.
// RUST_LOG picks the filter (default info); LOG_FORMAT=json switches to JSON lines.
fn init_runtime() {
    // A local .env may carry API_KEY and DATABASE_URL; absent in containers.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => subscriber.json().with_current_span(true).init(),
        _ => subscriber.compact().init(),
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "media lake panicked");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = Settings::load().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        Error::other(e.to_string())
    })?;

    let state = build_state(&settings).await?;

    let address = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

async fn build_state(settings: &Settings) -> Result<AppState> {
    if settings.api_key.is_empty() {
        tracing::warn!("API_KEY is not set; every media request will be rejected");
    }

    let state = match settings.storage {
        StorageBackend::Postgres => {
            let pool = db::connect_pool(&settings.database_url, settings.database_max_connections)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "failed to connect to database");
                    Error::other(format!("failed to connect to database: {e}"))
                })?;

            if settings.run_migrations {
                db::run_migrations(&pool).await.map_err(|e| {
                    tracing::error!(error = %e, "failed to run migrations");
                    Error::other(format!("failed to run migrations: {e}"))
                })?;
                tracing::debug!("migrations applied");
            }

            AppState::new(
                Arc::new(PostgresMediaAssetStore { db: pool }),
                settings.api_key.as_str(),
            )
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; assets are lost on restart");
            AppState::new(
                Arc::new(InMemoryMediaAssetStore::default()),
                settings.api_key.as_str(),
            )
        }
    };

    tracing::debug!(
        storage = ?settings.storage,
        max_connections = settings.database_max_connections,
        "media store configured"
    );
    Ok(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
