//! Gantry CLI
//!
//! Command-line views over the Gantry job platform: job status, retry
//! history, task attempts and container logs, rendered from the normalized
//! client model.

mod commands;
mod config;
mod session;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gantry")]
#[command(about = "Gantry job platform CLI", long_about = None)]
struct Cli {
    /// REST server URL
    #[arg(
        long,
        env = "GANTRY_SERVER_URL",
        default_value = "http://localhost:9186"
    )]
    server_url: String,

    /// Bearer token (falls back to the cached session token)
    #[arg(long, env = "GANTRY_TOKEN")]
    token: Option<String>,

    /// Log format served by this deployment: "yarn" or "log-manager"
    #[arg(long, env = "GANTRY_LOG_FORMAT", default_value = "yarn")]
    log_format: String,

    /// Grafana base URL for metrics links
    #[arg(
        long,
        env = "GANTRY_GRAFANA_URL",
        default_value = "http://localhost:3000"
    )]
    grafana_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gantry_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::new(
        cli.server_url,
        cli.token.or_else(session::load_token),
        &cli.log_format,
        cli.grafana_url,
    )?;

    handle_command(cli.command, &config).await
}
