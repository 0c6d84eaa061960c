// Static export binary
//
// Usage: cargo run --bin site_export -- [OUT_DIR]
// Reads content from CONTENT_DIR (default: content), writes to OUT_DIR (default: dist)

use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use venovox_site::{export_site, ContentStore, SiteConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "venovox_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env();
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    tracing::info!("Exporting {} -> {}", config.content_dir.display(), out_dir.display());

    let store = ContentStore::new(&config.content_dir);
    let report = export_site(&store, &out_dir)?;

    println!("Exported {} pages to {}", report.total_pages(), out_dir.display());
    println!("  index pages:   {}", report.index_pages);
    println!("  service pages: {}", report.service_pages);
    println!("  post pages:    {}", report.post_pages);

    Ok(())
}
