mod config;
mod db;
mod error;
mod workflow;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("task workflow failed: {err:#}");
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env();

    let client = db::create_client(&config.uri).await?;
    let database = client.database(&config.database);

    // Shutdown must run even when a workflow step failed
    let outcome = workflow::run(&database, &config.collection).await;
    client.shutdown().await;
    tracing::info!("disconnected from MongoDB");

    outcome
}
