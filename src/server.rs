//! HTTP server initialization and runtime setup.
//!
//! Connects the database pool, applies migrations, wires repositories into
//! services, and runs the Axum server until shutdown.

use crate::application::services::{ShortenerOptions, ShortenerService, StatsService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgClickEventRepository, PgShortUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let short_urls = Arc::new(PgShortUrlRepository::new(pool.clone()));
    let click_events = Arc::new(PgClickEventRepository::new(pool));

    let options = ShortenerOptions {
        base_url: config.resolve_base_url(),
        code_length: config.code_length,
        max_generation_attempts: config.code_generation_attempts,
        list_page_size: config.list_page_size,
    };

    let state = AppState {
        shortener: Arc::new(ShortenerService::new(short_urls.clone(), options)),
        stats: Arc::new(StatsService::new(short_urls, click_events)),
    };

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
