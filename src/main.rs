//! python-api: a minimal HTTP service stub for orchestration demos.
//!
//! This is the application entry point. It initializes tracing, resolves the
//! listen port from the `PORT` environment variable, sets up the Axum router
//! with all routes, and starts the HTTP server.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use python_api::config::{self, DEFAULT_LOG_FILTER, PORT_ENV_VAR};
use python_api::routes::create_router;

/// python-api: health and identity endpoints over plain HTTP
#[derive(Parser, Debug)]
#[command(name = "python-api", version, about)]
struct Args {
    /// Listen port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "python_api=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Resolve port: CLI > PORT env > default
    let port_env = std::env::var(PORT_ENV_VAR).ok();
    let port = config::resolve_port(args.port, port_env.as_deref());

    let app = create_router();

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Startup banner on stdout is part of the service contract.
    println!("Python API listening on port {port}");
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
