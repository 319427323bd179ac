//! OctoFit Web Dashboard
//!
//! Server-rendered shell for the five resource views, built with Axum.
//!
//! # Routes
//!
//! - `GET /` - Landing page
//! - `GET /activities`, `/leaderboard`, `/teams`, `/users`, `/workouts` - View pages
//! - `GET /views/:segment` - View fragments (fresh fetch per request)
//! - `GET /health/live` - Liveness check
//! - `GET /health` - Uptime and version
//!
//! Anything else gets the Not Found page.

pub mod error;
pub mod pages;
pub mod state;
pub mod templates;

pub use error::{WebError, WebResult};
pub use state::AppState;

use axum::{extract::State, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::resource::Resource;

/// Build the dashboard router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let mut router: Router<Arc<AppState>> = Router::new().route("/", get(pages::home));

    for resource in Resource::ALL {
        router = router
            .route(
                resource.route(),
                get(move || pages::resource_page(resource)),
            )
            .route(
                resource.fragment_route(),
                get(move |state: State<Arc<AppState>>| pages::resource_fragment(state, resource)),
            );
    }

    let health_routes = Router::new()
        .route("/live", get(pages::liveness))
        .route("/", get(pages::health));

    router
        .nest("/health", health_routes)
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), WebError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("OctoFit dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("OctoFit dashboard shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
