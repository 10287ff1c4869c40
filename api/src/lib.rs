//! HTTP surface: `POST /ask`, `GET /health` and the static frontend.

use std::{path::Path, sync::Arc};

pub mod core;
pub mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

pub use crate::core::app_state::{AppState, ConfigError, ServerConfig};
pub use crate::error_handler::{AppError, AppResult};

/// Builds the application router.
///
/// API routes win over static files; every other path is looked up under
/// `site_dir`, with `/` resolving to `index.html`.
pub fn router(state: AppState, site_dir: &Path) -> Router {
    Router::new()
        .route("/ask", post(routes::ask::ask_route::ask))
        .route("/health", get(routes::health_route::health))
        .with_state(Arc::new(state))
        .fallback_service(ServeDir::new(site_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves until Ctrl+C.
///
/// # Errors
/// [`AppError::Bind`] if the address cannot be bound, [`AppError::Server`]
/// if the server loop fails.
pub async fn start(cfg: ServerConfig, state: AppState) -> AppResult<()> {
    let addr = cfg.bind_addr();
    let app = router(state, &cfg.site_dir);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(%addr, site_dir = %cfg.site_dir.display(), "server listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
