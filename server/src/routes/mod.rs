//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no application API. It stitches Leptos SSR rendering, the
//! compiled `/pkg` bundle, a health probe, and a static fallback directory
//! under a single Axum router.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::error::HostError;

/// Leptos SSR frontend: SSR page at `/`, assets at `/pkg`, static fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or `[[workspace.metadata.leptos]]` section).
pub fn app(config: &HostConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    Ok(router(config, conf.leptos_options))
}

/// Assemble the router for already-resolved Leptos options.
pub fn router(config: &HostConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(aegis_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || aegis_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_route = format!("/{}", leptos_options.site_pkg_dir.trim_matches('/'));
    let pkg_dir = PathBuf::from(&*leptos_options.site_root).join(&*leptos_options.site_pkg_dir);
    tracing::debug!(route = %pkg_route, pkg = %pkg_dir.display(), public = %config.public_dir.display(), "serving static assets");

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service(&pkg_route, ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
