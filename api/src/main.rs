//! Discount API Server
//!
//! Serves discount computations over HTTP, backed by PostgreSQL.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use discount_api::adapters::{PostgresDiscountDataSource, TracingObserver};
use discount_api::app::DiscountCalculator;
use discount_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,discount_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting discount API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let source = PostgresDiscountDataSource::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let calculator = Arc::new(DiscountCalculator::new(
        Arc::new(source),
        Arc::new(TracingObserver),
    ));

    let app = discount_api::router(calculator);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
