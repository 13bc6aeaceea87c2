//! Lazaro data service entry point.
//!
//! Parses the command line, loads configuration (optional TOML file with
//! built-in defaults), initializes tracing, builds the Axum router and serves
//! it until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lazaro_data_service::config::{AppConfig, DEFAULT_LOG_FILTER};
use lazaro_data_service::http::start_server;
use lazaro_data_service::{create_router, AppState, Result};

/// Lazaro data service: status and capability reporting over HTTP
#[derive(Parser, Debug)]
#[command(name = "lazaro-data-service", version, about)]
struct Args {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "lazaro_data_service=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        service = %config.service.name,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
