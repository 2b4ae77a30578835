//! AdIntel gateway CLI

use std::path::PathBuf;

use adintel_gateway::{load_config, Config};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "adintel-gateway")]
#[command(about = "API proxy and static host for the AdIntel dashboard")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Backend API base URL (overrides config file)
    #[arg(long, env = "NEXT_PUBLIC_API_URL")]
    api_url: Option<String>,

    /// Directory containing the compiled dashboard (overrides config file)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, api_url={:?}, site_root={:?}, log_level={:?}",
        args.config,
        args.port,
        args.api_url,
        args.site_root,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(api_url) = args.api_url {
        config.backend.url = api_url;
    }
    if let Some(site_root) = args.site_root {
        config.server.site_root = Some(site_root);
    }

    tracing::info!("Starting gateway");
    adintel_gateway::run(config).await?;

    Ok(())
}
