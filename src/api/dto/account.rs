//! DTOs for the account endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to open a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Caller-assigned unique account identifier.
    #[serde(rename = "AccountId")]
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub account_id: String,
}

/// Response confirming account creation.
///
/// Carries the generated password; it is returned exactly once.
#[derive(Debug, Serialize)]
pub struct AccountCreatedResponse {
    pub success: bool,
    pub description: String,
    pub password: String,
}
