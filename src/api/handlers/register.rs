//! Handler for URL registration.

use axum::{Extension, Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::register::{RegisterUrlRequest, RegisterUrlResponse};
use crate::api::middleware::auth::CurrentAccount;
use crate::error::AppError;
use crate::infrastructure::security::Authority;
use crate::state::AppState;

/// Registers a full-length URL under the authenticated account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com", "redirectType": 302 }
/// ```
///
/// `redirectType` is optional and defaults to 302.
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://localhost:3000/xC9mK2pQ" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure, 403 Forbidden when the
/// account lacks the register authority, and 404 Not Found when the account
/// record has disappeared.
pub async fn register_url_handler(
    State(state): State<AppState>,
    Extension(CurrentAccount(account_id)): Extension<CurrentAccount>,
    Json(payload): Json<RegisterUrlRequest>,
) -> Result<(StatusCode, Json<RegisterUrlResponse>), AppError> {
    payload.validate()?;

    if !state.sessions.has_authority(&account_id, Authority::Register) {
        return Err(AppError::forbidden(
            "Account is not authorized to register URLs",
            json!({ "account_id": account_id }),
        ));
    }

    let registered = state
        .registrations
        .register_url(&account_id, payload.url, payload.redirect_type)
        .await?;

    let short_url = format!(
        "{}/{}",
        state.base_url.trim_end_matches('/'),
        registered.id
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterUrlResponse { short_url }),
    ))
}
