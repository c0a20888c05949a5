//! Handler for per-account usage statistics.

use std::collections::BTreeMap;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::middleware::auth::CurrentAccount;
use crate::error::AppError;
use crate::infrastructure::security::Authority;
use crate::state::AppState;

/// Reports the registration count per full-length URL for an account.
///
/// # Endpoint
///
/// `GET /statistic/{account_id}`
///
/// # Response
///
/// ```json
/// { "http://example.com": 2, "http://other.example": 1 }
/// ```
///
/// # Errors
///
/// Returns 403 Forbidden when the caller lacks the statistics authority and
/// 404 Not Found when the account does not exist.
pub async fn statistics_handler(
    State(state): State<AppState>,
    Extension(CurrentAccount(principal)): Extension<CurrentAccount>,
    Path(account_id): Path<String>,
) -> Result<Json<BTreeMap<String, u64>>, AppError> {
    if !state
        .sessions
        .has_authority(&principal, Authority::StatRetrieval)
    {
        return Err(AppError::forbidden(
            "Account is not authorized to retrieve statistics",
            json!({ "account_id": principal }),
        ));
    }

    let counts = state.stats.redirect_counts(&account_id).await?;
    Ok(Json(counts))
}
