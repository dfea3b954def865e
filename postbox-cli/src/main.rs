//! postbox: feedback collection server.

mod tracing_setup;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use postbox_server::config::AppConfig;
use postbox_server::db;
use postbox_server::http::{run_server, AppState, ServerConfig};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "postbox", version, about = "Feedback collection server")]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Run against the transient in-memory backend (tests/CI)
    #[arg(long)]
    embedded: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may be set directly.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    let config = AppConfig::from_env(cli.embedded).context("invalid configuration")?;
    tracing::info!(backend = config.backend.name(), "starting postbox");

    let store = db::connect(&config)
        .await
        .context("failed to open the feedback store")?;

    let state = AppState::new(store, &config.secret_key);
    let server = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    run_server(state, server).await.context("server error")?;

    Ok(())
}
