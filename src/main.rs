//! Dashboard liveness service entry point.
//!
//! Initializes tracing, loads configuration from an optional TOML file, sets
//! up the Axum router and serves it until SIGTERM/SIGINT.

use clap::Parser;

use dashboard::config::AppConfig;
use dashboard::create_router;
use dashboard::http::{bind, start_server};
use dashboard::logging::{init_tracing, resolve_log_filter};

/// Dashboard backend liveness probe
#[derive(Parser, Debug)]
#[command(name = "dashboard", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml, if present]
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "dashboard=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listen host, overrides http.host [default: from config or 0.0.0.0]
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration selects the log format, so errors here go to stderr
    let mut config = match AppConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    let log_filter = resolve_log_filter(args.log_level, std::env::var("RUST_LOG").ok());
    init_tracing(&log_filter, config.logging.format)?;

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        format = ?config.logging.format,
        "Loaded configuration"
    );

    let listener = bind(&config.http).inspect_err(|e| {
        tracing::error!(error = %e, "Failed to start server");
    })?;

    start_server(create_router(), listener, &config.http).await?;

    Ok(())
}
