// API Server Binary Entry Point
//
// Purpose: Serve the world detail view over HTTP from a JSON catalog file
// Usage: cargo run --features api --bin api_server

use anyhow::Context;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use world_encyclopedia::{create_router, AppState, WorldCatalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "world_encyclopedia=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let worlds_path = std::env::var("WORLDS_PATH")
        .unwrap_or_else(|_| "data/worlds.json".to_string());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let cache_ttl_secs: u64 = std::env::var("CACHE_TTL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(300);

    tracing::info!("Configuration:");
    tracing::info!("  WORLDS_PATH: {}", worlds_path);
    tracing::info!("  PORT: {}", port);
    tracing::info!("  CACHE_TTL_SECS: {}", cache_ttl_secs);

    let catalog = WorldCatalog::from_path(&worlds_path)
        .with_context(|| format!("loading world catalog from {}", worlds_path))?;
    let state = AppState::new(catalog, Duration::from_secs(cache_ttl_secs));

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
