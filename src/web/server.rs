//! HTTP server implementation

use axum::{extract::DefaultBodyLimit, routing::put, Router};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{delete_value, get_value, put_value, SharedStore};
use crate::store::Store;

/// Build the application router around `store`
pub fn router<S: Store>(store: S) -> Router {
    router_with_state(Arc::new(Mutex::new(store)))
}

/// Build the application router around already shared state
pub fn router_with_state<S: Store>(state: SharedStore<S>) -> Router {
    Router::new()
        .route(
            "/v1/:key",
            put(put_value::<S>)
                .get(get_value::<S>)
                .delete(delete_value::<S>),
        )
        // Values have no size limit
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `store` on an already bound listener until `shutdown` resolves
pub async fn serve<S, F>(listener: TcpListener, store: S, shutdown: F) -> anyhow::Result<()>
where
    S: Store,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(store);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Run the HTTP server on `addr` until Ctrl-C
pub async fn run<S: Store>(addr: SocketAddr, store: S) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("FerrumKV listening on http://{}", listener.local_addr()?);

    serve(listener, store, shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            // Never resolve; keep serving
            std::future::pending::<()>().await
        }
    }
}
