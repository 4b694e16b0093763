//! Portfolio Daemon - artist portfolio HTTP API.
//!
//! A single Rust binary that serves CRUD endpoints over an in-memory
//! collection of portfolio projects.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio_core::ProjectStore;
use portfolio_daemon::server::{create_router, AppState};

/// Artist portfolio API daemon
#[derive(Parser, Debug)]
#[command(name = "portfolio-daemon")]
#[command(about = "In-memory artist portfolio HTTP API")]
#[command(version)]
struct Cli {
    /// HTTP port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Start without the sample projects
    #[arg(long)]
    empty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let store = if cli.empty {
        ProjectStore::new()
    } else {
        ProjectStore::with_samples()
    };
    info!("Project store ready with {} projects", store.len());

    let router = create_router(AppState::new(store));
    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Portfolio API listening on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["portfolio-daemon"]).unwrap();
        assert!(!cli.empty);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_port_flag() {
        let cli = Cli::try_parse_from([
            "portfolio-daemon",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--empty",
        ])
        .unwrap();
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.host, "127.0.0.1");
        assert!(cli.empty);
    }
}
