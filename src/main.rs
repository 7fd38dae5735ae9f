//! Phasefacts: a phase-science facts & puns HTTP service.
//!
//! This is the application entry point. It loads the `.env` file, initializes
//! tracing from the configured log level, builds the immutable configuration
//! and content store, sets up the Axum router, and starts the HTTP server.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phasefacts::config::{Config, DEFAULT_HOST, DEFAULT_PORT};
use phasefacts::content::ContentStore;
use phasefacts::http::start_server;
use phasefacts::routes::create_router;
use phasefacts::state::AppState;

/// Phasefacts: a phase-science facts & puns HTTP service
#[derive(Parser, Debug)]
#[command(name = "phasefacts", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level filter (e.g., "phasefacts=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading any configuration
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();

    // Initialize tracing with priority: CLI > env > LOG_LEVEL-derived
    let log_filter = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.log_filter());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(env = %config.environment, "Loaded configuration");

    // Missing required variables degrade /health instead of failing startup
    let missing = config.missing_required();
    if !missing.is_empty() {
        tracing::warn!(
            ?missing,
            "Required configuration absent, health will report degraded"
        );
    }

    let content = ContentStore::new();
    tracing::info!(
        puns = content.pun_count(),
        facts = content.fact_count(),
        "Loaded content store"
    );

    let state = AppState::new(config, content);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .expect("Invalid host or port");

    start_server(addr, app).await?;

    Ok(())
}
