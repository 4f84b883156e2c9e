use std::{future::Future, net::SocketAddr};

use axum::Router;
use common::BoxResult;
use tokio::sync::broadcast;

/// Binds `addr` and serves `app` until a shutdown signal is received.
///
/// Returns the bound address together with the server future. The address is
/// resolved before the future is polled, so callers can bind to port 0 and
/// discover the ephemeral port. Used during testing.
pub async fn serve_at(
    addr: SocketAddr,
    app: Router,
    mut shutdown: broadcast::Receiver<()>,
) -> BoxResult<(SocketAddr, impl Future<Output = BoxResult<()>>)> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;

    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                // A closed channel also shuts the server down.
                let _ = shutdown.recv().await;
            })
            .await?;
        Ok(())
    };

    Ok((addr, server))
}
