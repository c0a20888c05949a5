//! HTTP Basic authentication middleware backed by the session registry.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Identity of the authenticated account, inserted into request extensions
/// for downstream handlers.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub String);

/// Authenticates requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(<AccountId>:<password>)
/// ```
///
/// # Authentication Flow
///
/// 1. Extract credentials from the `Authorization` header
/// 2. Verify them against the session registry
/// 3. Insert [`CurrentAccount`] into request extensions
/// 4. Continue to the next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` (with a `WWW-Authenticate: Basic` challenge)
/// if the header is missing, malformed, or the credentials do not match a
/// registered session.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((account_id, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let password = password.unwrap_or_default();
    if !st.sessions.verify(&account_id, &password) {
        return Err(AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Invalid account credentials"}),
        ));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentAccount(account_id));

    Ok(next.run(req).await)
}
