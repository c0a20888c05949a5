//! Registered URL entity mapping a short id to its full-length target.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// HTTP status for a permanent redirect.
pub const REDIRECT_PERMANENT: u16 = 301;
/// HTTP status for a temporary redirect, the default.
pub const REDIRECT_TEMPORARY: u16 = 302;

/// A full-length URL registered under a generated short id.
///
/// The id is system-generated and becomes the primary key of the stored
/// record; it is never caller-supplied. Records are immutable after creation
/// in the normal flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUrl {
    pub id: String,
    pub url: String,
    /// HTTP status answered on redirect, 301 or 302.
    #[serde(default = "default_redirect_type")]
    pub redirect_type: u16,
}

fn default_redirect_type() -> u16 {
    REDIRECT_TEMPORARY
}

impl RegisteredUrl {
    /// Creates a new registered URL.
    pub fn new(id: impl Into<String>, url: impl Into<String>, redirect_type: u16) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            redirect_type,
        }
    }

    /// Returns true when clients are redirected with 301 Moved Permanently.
    pub fn is_permanent(&self) -> bool {
        self.redirect_type == REDIRECT_PERMANENT
    }
}

impl Keyed for RegisteredUrl {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registered_url() {
        let url = RegisteredUrl::new("abc12345", "http://example.com", REDIRECT_TEMPORARY);

        assert_eq!(url.id, "abc12345");
        assert_eq!(url.url, "http://example.com");
        assert!(!url.is_permanent());
    }

    #[test]
    fn test_permanent_redirect() {
        let url = RegisteredUrl::new("abc12345", "http://example.com", REDIRECT_PERMANENT);
        assert!(url.is_permanent());
    }

    #[test]
    fn test_key_is_short_id() {
        let url = RegisteredUrl::new("abc12345", "http://example.com", REDIRECT_TEMPORARY);
        assert_eq!(url.key(), "abc12345");
    }

    #[test]
    fn test_serialized_field_names() {
        let url = RegisteredUrl::new("abc12345", "http://example.com", REDIRECT_PERMANENT);
        let json = serde_json::to_value(&url).unwrap();

        assert_eq!(json["id"], "abc12345");
        assert_eq!(json["url"], "http://example.com");
        assert_eq!(json["redirectType"], 301);
    }

    #[test]
    fn test_deserialize_defaults_to_temporary() {
        let url: RegisteredUrl =
            serde_json::from_str(r#"{"id":"abc12345","url":"http://example.com"}"#).unwrap();
        assert_eq!(url.redirect_type, REDIRECT_TEMPORARY);
    }
}
