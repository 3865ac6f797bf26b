//! sensorhub-server — HTTP boundary of the sensorhub service.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `POST /api/sensor/data` | single or batch ingest |
//! | `GET /readings?limit=N&type=T` | recent readings, newest first |
//! | `GET /readings/summary?limit=N` | per-sensor-type statistics |
//! | `GET /health` | liveness |

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use sensorhub_core::config::{Config, ServerConfig};
use sensorhub_core::ReadingStore;

/// Creates the router with all routes and middleware.
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/api/sensor/data", post(routes::ingest))
        .route("/readings", get(routes::readings))
        .route("/readings/summary", get(routes::summary))
        .route("/health", get(routes::health))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if server.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Bind `server.bind_addr()` and serve until `shutdown` resolves. In-flight
/// requests are allowed to finish.
pub async fn serve(
    state: AppState,
    server: &ServerConfig,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let router = create_router(state, server);
    let listener = TcpListener::bind(server.bind_addr()).await?;

    tracing::info!("server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Serve `store` until `shutdown` resolves, then close the store. The store
/// is closed even when serving fails; the serve error wins.
pub async fn run(
    store: Arc<dyn ReadingStore>,
    config: &Config,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&store), config.readings.default_limit);
    let served = serve(state, &config.server, shutdown).await;

    store.close()?;
    served
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
