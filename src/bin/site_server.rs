// Site server binary entry point
//
// Usage: cargo run --bin site_server
// Configuration: CONTENT_DIR, STATIC_DIR, PORT, PAGE_CACHE_TTL_SECS

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use venovox_site::{create_router, AppState, SiteConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "venovox_site=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    let config = SiteConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_DIR: {}", config.content_dir.display());
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  PAGE_CACHE_TTL_SECS: {}", config.page_cache_ttl_secs);

    if !config.content_dir.is_dir() {
        tracing::warn!(
            "Content directory {} does not exist; every page will be not-found",
            config.content_dir.display()
        );
    }

    let state = AppState::new(&config);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
