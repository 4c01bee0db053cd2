//! KI-Cockpit HTTP Server
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Server-rendered dashboard (`?tab=` selects a tab)
//! - `POST /bubble/click` - Register a bubble-challenge click
//! - `POST /chat` - Submit a chat message to the KI-Agent
//! - `GET /static/style.css` - Stylesheet
//!
//! ## Data
//! - `GET /api/v1/dashboard` - Sample snapshot
//! - `GET /api/v1/revenue/chart` - Revenue chart series
//!
//! ## Session
//! - `GET /api/v1/session` - Current session state
//! - `POST /api/v1/bubble/click` - Register a click
//! - `POST /api/v1/chat` - Submit a chat message
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use ki_cockpit::api::{serve, AppState};
//! use ki_cockpit::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::from_config(&config)?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::page::dashboard_page))
        .route("/bubble/click", post(routes::page::bubble_click))
        .route("/chat", post(routes::page::chat_submit))
        .route("/static/style.css", get(routes::page::stylesheet));

    let api_routes = Router::new()
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/revenue/chart", get(routes::dashboard::get_revenue_chart))
        .route("/session", get(routes::session::get_session))
        .route("/bubble/click", post(routes::session::click))
        .route("/chat", post(routes::session::chat));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    page_routes
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the server and the session sweeper
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let sweeper = state.sessions.start_background_sweep();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("KI-Cockpit listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    sweeper.abort();
    tracing::info!("KI-Cockpit shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
