//! Page Handlers
//!
//! - GET / - Landing page
//! - GET /{segment} - Page shell for one resource view
//! - GET /views/{segment} - The view itself, rendered after its fetch settles
//! - GET /health/live - Liveness check
//! - GET /health - Uptime and version

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde::Serialize;
use std::sync::Arc;

use super::error::WebResult;
use super::state::AppState;
use super::templates::{
    nav_links, render_fragment, HomeTemplate, NotFoundTemplate, ResourceTemplate,
};
use crate::endpoint::endpoint_url;
use crate::render::build_page;
use crate::resource::Resource;
use crate::view;

/// GET /
pub async fn home() -> WebResult<Html<String>> {
    Ok(Html(HomeTemplate::new().render()?))
}

/// GET /{segment}
///
/// The shell shows the loading rendering and pulls the fragment in.
pub async fn resource_page(resource: Resource) -> WebResult<Html<String>> {
    Ok(Html(ResourceTemplate::new(resource).render()?))
}

/// GET /views/{segment}
///
/// Every request mounts a fresh view, so navigating back to a resource
/// always refetches.
pub async fn resource_fragment(
    State(state): State<Arc<AppState>>,
    resource: Resource,
) -> WebResult<Html<String>> {
    let endpoint = endpoint_url(&state.config.backend, resource);
    let view = view::load(resource, endpoint, state.source.as_ref()).await;

    let page = build_page(resource, view.state());
    Ok(Html(render_fragment(resource, &page)?))
}

/// Fallback for unknown paths
pub async fn not_found() -> WebResult<(StatusCode, Html<String>)> {
    let html = NotFoundTemplate {
        nav: nav_links(None),
    }
    .render()?;
    Ok((StatusCode::NOT_FOUND, Html(html)))
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
