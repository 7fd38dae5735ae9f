//! Listener binding and serving.

use std::net::SocketAddr;

use axum::Router;

use super::shutdown::shutdown_signal;

/// Binds the address and serves the router until a shutdown signal arrives.
///
/// In-flight requests complete before the future resolves.
pub async fn start_server(addr: SocketAddr, app: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
