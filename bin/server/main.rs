//! Relay Server
//!
//! Runs the HF router relay as a standalone HTTP server.

use anyhow::Result;
use clap::Parser;
use hf_relay::{run_server, RelayConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "relay-server")]
#[command(about = "HF Router Relay - keyless chat proxy for the portfolio frontend")]
struct Args {
    /// Listen port
    #[arg(short, long, default_value = "3000", env = "PORT")]
    port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Default HF API key; requests may override it with their own
    #[arg(long, env = "HF_API_KEY")]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hf_relay=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = RelayConfig {
        host: args.host,
        port: args.port,
        api_key: args.api_key.filter(|k| !k.is_empty()),
        ..RelayConfig::default()
    };

    info!("Starting HF relay");
    info!("  Listening on: {}:{}", config.host, config.port);

    // Serve until shutdown
    run_server(config).await?;

    Ok(())
}
