//! Server configuration and startup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes;
use crate::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Embedded UI
        .route("/", get(routes::index))
        // Health check
        .route("/health", get(routes::health::health_check))
        // API v1
        .nest("/api/v1", api_v1_routes())
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes.
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/charts", post(routes::charts::generate))
        .route("/charts/{metric}/html", get(routes::charts::preview))
        .route("/charts/{metric}/download", get(routes::charts::download))
}

/// Run the server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Satcurve server listening on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/charts");
    tracing::info!("  GET  /api/v1/charts/{{metric}}/html");
    tracing::info!("  GET  /api/v1/charts/{{metric}}/download");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutting down...");
}
