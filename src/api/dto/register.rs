//! DTOs for the URL registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::REDIRECT_TEMPORARY;

/// Request to register a full-length URL under the authenticated account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUrlRequest {
    /// The full-length target URL.
    #[validate(length(min = 1, message = "cannot be empty"))]
    #[validate(url(message = "must be a well-formed URL"))]
    pub url: String,

    /// HTTP status used when redirecting, 301 or 302. Defaults to 302.
    #[serde(rename = "redirectType", default = "default_redirect_type")]
    pub redirect_type: u16,
}

fn default_redirect_type() -> u16 {
    REDIRECT_TEMPORARY
}

/// Response carrying the generated short URL.
#[derive(Debug, Serialize)]
pub struct RegisterUrlResponse {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}
