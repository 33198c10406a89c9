use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use registrar::api::{self, AppState};
use registrar::config::Config;

#[derive(Parser, Debug)]
#[command(name = "registrar")]
#[command(about = "Minimal user registration service with server-side field validation")]
#[command(version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "REGISTRAR_PORT", default_value = "3000")]
    port: u16,

    /// Address to bind to
    #[arg(short, long, env = "REGISTRAR_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Config file path (optional)
    #[arg(short, long, env = "REGISTRAR_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, env = "REGISTRAR_VERBOSE")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "registrar=debug,tower_http=debug"
    } else {
        "registrar=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from file if provided, otherwise use defaults
    let config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    let state = AppState::new(config);
    let app = api::create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .context("Invalid bind address")?;
    info!("Starting registrar on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
