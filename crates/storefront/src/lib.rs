//! VOLT Storefront library.
//!
//! This crate provides the storefront as a library so the binary and the
//! integration tests build exactly the same router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carts;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::error::AppError;
use crate::state::AppState;

/// Directory holding the stylesheet, relative to this crate.
const STATIC_DIR: &str = "static";

/// Build the application router with sessions, request IDs and tracing.
///
/// Sentry layers are added by the binary, outside this router.
///
/// # Errors
///
/// Returns an error if the session layer cannot be built from the config.
pub fn app(state: AppState) -> Result<Router, AppError> {
    let session_layer = middleware::create_session_layer(state.config())?;
    let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(STATIC_DIR);

    Ok(Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(session_layer)
        .layer(from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
