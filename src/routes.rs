//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /account`                  - Open an account (public)
//! - `GET  /{short_url_id}`           - Short URL redirect (public)
//! - `GET  /health`                   - Liveness and session count (public)
//! - `GET  /help`                     - Static user guide (public)
//! - `POST /register`                 - Register a URL (Basic auth)
//! - `GET  /statistic/{account_id}`   - Usage statistics (Basic auth)
//! - `DELETE /account/{account_id}`   - Delete own account (Basic auth)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - HTTP Basic against the session registry
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{create_account_handler, health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeFile;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/account", post(create_account_handler))
        .route("/health", get(health_handler))
        .route_service("/help", ServeFile::new("static/user_guide.html"))
        .merge(protected)
        // Static segments take precedence over this catch-all capture.
        .route("/{short_url_id}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
