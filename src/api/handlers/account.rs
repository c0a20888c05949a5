//! Handlers for account creation and deletion.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::account::{AccountCreatedResponse, CreateAccountRequest};
use crate::api::middleware::auth::CurrentAccount;
use crate::error::AppError;
use crate::state::AppState;

/// Opens a new account and returns the generated password.
///
/// # Endpoint
///
/// `POST /account`
///
/// # Request Body
///
/// ```json
/// { "AccountId": "alice" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "description": "Your account is opened",
///   "password": "xC9mK2pQ"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the id is missing or malformed and
/// 409 Conflict when the id is already taken.
pub async fn create_account_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountCreatedResponse>), AppError> {
    payload.validate()?;

    let account = state.accounts.create_account(&payload.account_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountCreatedResponse {
            success: true,
            description: "Your account is opened".to_string(),
            password: account.password,
        }),
    ))
}

/// Deletes the authenticated account and every URL registered under it.
///
/// # Endpoint
///
/// `DELETE /account/{account_id}`
///
/// The path id must match the authenticated principal; accounts cannot
/// delete each other.
///
/// # Errors
///
/// Returns 403 Forbidden when the path id is not the caller's own account
/// and 404 Not Found when the account does not exist.
pub async fn delete_account_handler(
    State(state): State<AppState>,
    Extension(CurrentAccount(principal)): Extension<CurrentAccount>,
    Path(account_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if principal != account_id {
        return Err(AppError::forbidden(
            "Accounts can only be deleted by their owner",
            json!({ "account_id": account_id }),
        ));
    }

    state.accounts.delete_account(&account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
