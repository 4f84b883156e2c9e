use std::sync::Arc;

use common::{config::Config, BoxError};
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    common::tracing::register_logger();

    let config_path = std::env::var("FRAGSERVE_CONFIG")
        .map_err(|_| BoxError::from("no FRAGSERVE_CONFIG env var set"))?;
    let config = Config::load(config_path).map_err(|e| format!("failed to load config: {e}"))?;

    tracing::info!("IFC directory: {}", config.ifc_dir.display());
    tracing::info!("Fragments directory: {}", config.fragments_dir.display());

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let api_addr = config.api_addr;
    let (addr, server) = api::serve(api_addr, Arc::new(config), shutdown_rx).await?;
    tracing::info!("API running at {}", addr);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            let _ = shutdown_tx.send(());
        }
    });

    server.await
}
