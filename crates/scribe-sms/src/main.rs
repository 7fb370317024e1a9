use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use scribe_sms::{serve, AppState, OpenAiClient, RelayConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = RelayConfig::parse();
    info!("Using model {} at {}", config.model, config.base_url);

    let client = OpenAiClient::new(config.completion_config())
        .context("Failed to create completion client")?;

    serve(AppState::new(Arc::new(client)), config.port)
        .await
        .with_context(|| format!("Server on port {} failed", config.port))
}
