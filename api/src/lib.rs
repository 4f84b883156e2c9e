//! Fragserve HTTP API

use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use common::{config::Config, BoxResult};
use tokio::sync::broadcast;

mod ctx;
pub mod handlers;

use ctx::Ctx;
use handlers::{fragments, health, ifc, status};

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "fragserve-backend";

pub async fn serve(
    at: SocketAddr,
    config: Arc<Config>,
    shutdown: broadcast::Receiver<()>,
) -> BoxResult<(SocketAddr, impl Future<Output = BoxResult<()>>)> {
    // Register the routes
    let app = Router::new()
        .route("/health", get(health::handler))
        .route("/api/fragments", get(fragments::get_all::handler))
        .route(
            "/api/fragments/{filename}",
            get(fragments::get_by_name::handler),
        )
        .route("/api/ifc", get(ifc::get_all::handler))
        .route("/api/status", get(status::handler))
        .with_state(Ctx::new(&config));

    http_common::serve_at(at, app, shutdown).await
}
