// ABOUTME: datadesk binary - builds the tool registry and serves MCP on stdio.
// ABOUTME: Logging goes to stderr; stdout is reserved for protocol frames.

use tracing::info;
use tracing_subscriber::EnvFilter;

use datadesk::config::DbConfig;
use datadesk::server::{self, Router};
use datadesk::tools;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = DbConfig::from_env()?;
    let registry = tools::default_registry(&config).await;
    let count = registry.count().await;
    info!(tools = count, "datadesk ready");

    server::serve(Router::new(registry)).await?;
    Ok(())
}
