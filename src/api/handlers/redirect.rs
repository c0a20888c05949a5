//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short URL id to its registered full-length target.
///
/// # Endpoint
///
/// `GET /{short_url_id}`
///
/// Answers with the redirect status stored on the record — 301 Moved
/// Permanently or 302 Found — and the target in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found when the short id is not registered.
pub async fn redirect_handler(
    Path(short_url_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let registered = state.registrations.resolve(&short_url_id).await?;

    debug!("Redirecting <{}> to <{}>", short_url_id, registered.url);

    let status = StatusCode::from_u16(registered.redirect_type).map_err(|_| {
        AppError::corruption(
            "Stored redirect type is not a valid HTTP status",
            json!({ "id": registered.id, "redirect_type": registered.redirect_type }),
        )
    })?;

    Ok((status, [(header::LOCATION, registered.url)]).into_response())
}
