//! Router construction for the edge server.
//!
//! # Design
//! - The admin guard is layered on the admin namespace only; static asset
//!   paths and the storefront shell are served unguarded.
//! - Every admin path serves the SPA entry document once the guard allows it;
//!   routing inside the namespace is client-side.

use std::path::Path;
use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use mercato_api_models::ADMIN_PREFIX;

use crate::http::guard::require_admin;
use crate::http::health::health;
use crate::http::validator::AdminValidator;

/// Shared state handed to the guard middleware.
pub struct EdgeState {
    /// Validation backend consulted per guarded request.
    pub validator: Arc<dyn AdminValidator>,
}

impl EdgeState {
    /// Wrap a validator into router state.
    #[must_use]
    pub fn new(validator: Arc<dyn AdminValidator>) -> Self {
        Self { validator }
    }
}

/// Build the edge router over the given asset directory.
#[must_use]
pub fn edge_router(state: Arc<EdgeState>, asset_dir: &Path) -> Router {
    let index = asset_dir.join("index.html");

    let admin = Router::new()
        .route_service("/", ServeFile::new(index.clone()))
        .route_service("/{*rest}", ServeFile::new(index.clone()))
        .layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/healthz", get(health))
        .nest(ADMIN_PREFIX, admin)
        .fallback_service(ServeDir::new(asset_dir).not_found_service(ServeFile::new(index)))
        .layer(TraceLayer::new_for_http())
}
