//! HTTP server for apidir.
//!
//! Renders the API directory page, the invocation console, and the two JSON
//! documents the page is built from.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::shadow_reuse, reason = "Shadowing for Arc clones is idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod viewer;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use tower_http::trace::TraceLayer;

use apidir_core::{DETECTED_LIST_PATH, SETTINGS_PATH};
use apidir_service::{CatalogService, InvocationService, LocalSource};

pub use response_types::VersionResponse;
pub use viewer::Viewer;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Loads and merges the catalog for every page view
    pub catalog_service: Arc<CatalogService>,
    /// Issues endpoint requests for the invocation console
    pub invocation_service: Arc<InvocationService>,
    /// Local settings file and endpoint directory, when this server owns them
    pub local_source: Option<Arc<LocalSource>>,
    /// Compiled page templates
    pub viewer: Viewer,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::page::catalog_page))
        .route("/invoke", get(handlers::invoke::invoke_page))
        .route(DETECTED_LIST_PATH, get(handlers::documents::list_endpoints))
        .route(SETTINGS_PATH, get(handlers::documents::settings_document))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
