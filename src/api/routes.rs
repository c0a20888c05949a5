//! API route configuration for endpoints requiring authentication.
//!
//! All routes here require HTTP Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_account_handler, register_url_handler, statistics_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All routes protected by Basic authentication.
///
/// # Endpoints
///
/// - `POST   /register`                - Register a URL under the caller's account
/// - `GET    /statistic/{account_id}`  - Per-account registration statistics
/// - `DELETE /account/{account_id}`    - Delete the caller's account (cascades)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_url_handler))
        .route("/statistic/{account_id}", get(statistics_handler))
        .route("/account/{account_id}", delete(delete_account_handler))
}
