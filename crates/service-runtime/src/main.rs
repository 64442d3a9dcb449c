//! Service runtime entry point.

use anyhow::Result;
use service_runtime::config::RuntimeConfig;
use service_runtime::ServiceRuntime;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = RuntimeConfig::from_env();

    info!("===========================================");
    info!("  Modulith Service Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");
    info!("HTTP Port: {}", config.port);
    info!("Store: {}", config.store.connection_uri());
    info!("Press Ctrl+C to stop.");

    ServiceRuntime::new(config).run().await
}
