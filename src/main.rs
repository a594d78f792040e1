use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

use fe_stats::catalog::CatalogLoader;
use fe_stats::config::Config;
use fe_stats::observability::logging::init_logging;
use fe_stats::server;

#[derive(Parser)]
#[command(name = "fe-stats")]
#[command(about = "Read-only lookup service for character stats across game editions")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Override the configured listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();

    let config = Config::load(&cli.config)?;

    // The index is built completely before the listener binds; a dead base
    // directory or a broken edition map stops the process here.
    let loaded = CatalogLoader::new(config.catalog).load()?;
    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    info!(entries = loaded.index.len(), "catalog ready");

    let port = cli
        .port
        .or_else(|| std::env::var("PORT").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(config.server.port);

    server::start_server(Arc::new(loaded.index), &config.server.host, port).await
}
