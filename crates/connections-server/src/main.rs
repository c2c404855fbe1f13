//! Connections Server - HTTP backend for the Connections game client.
//!
//! Serves the daily puzzle, AI-generated pickup lines and category images
//! over JSON, backed by the connections-core library.

mod error;
mod handlers;
mod server;

use anyhow::Result;
use clap::Parser;
use connections_core::config::{GenerationConfig, NetworkConfig, UpstreamConfig};
use connections_core::network::HttpClient;
use connections_core::{PuzzleService, ServiceConfig};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "connections-server")]
#[command(about = "HTTP backend for the Connections game")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Base URL of the upstream puzzle service
    #[arg(long, default_value = UpstreamConfig::BASE_URL)]
    upstream_base_url: String,

    /// Base URL of the OpenAI-compatible generation API
    #[arg(long, default_value = GenerationConfig::API_BASE_URL)]
    openai_base_url: String,

    /// API key for the generation API
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// Chat model used for pickup lines
    #[arg(long, default_value = GenerationConfig::TEXT_MODEL)]
    text_model: String,

    /// Image model used for category illustrations
    #[arg(long, default_value = GenerationConfig::IMAGE_MODEL)]
    image_model: String,

    /// Maximum generation calls in flight per enrichment request
    #[arg(long, default_value_t = GenerationConfig::MAX_CONCURRENT_GENERATIONS)]
    max_concurrent_generations: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Connections Server");

    if args.openai_api_key.is_none() {
        warn!("No OpenAI API key configured; pickup line and image requests will fail");
    }

    let config = ServiceConfig {
        upstream_base_url: args.upstream_base_url,
        openai_base_url: args.openai_base_url,
        openai_api_key: args.openai_api_key,
        text_model: args.text_model,
        image_model: args.image_model,
        max_concurrent_generations: args.max_concurrent_generations,
    };

    let state = server::AppState {
        proxy_client: HttpClient::with_timeout(NetworkConfig::REQUEST_TIMEOUT)?,
        upstream_base_url: config.upstream_base_url.clone(),
        service: PuzzleService::builder().config(config).build()?,
    };

    // Start the server
    let addr = server::start_server(state, &args.host, args.port).await?;

    // Print port for launchers and tests to read (intentional stdout)
    println!("SERVER_PORT={}", addr.port());

    info!("Connections server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
