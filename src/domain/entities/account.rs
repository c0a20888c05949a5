//! Account entity owning registered short URLs.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// A user account able to register URLs and query usage statistics.
///
/// The id is caller-assigned at registration time and immutable afterwards.
/// The password is generated by the application and returned exactly once in
/// the account-creation response; clients authenticate with it from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "AccountId")]
    pub id: String,
    pub password: String,
    /// Short URL ids registered under this account. The full-length targets
    /// live in the URL store; only the references are kept here.
    #[serde(default)]
    pub redirects: Vec<String>,
}

impl Account {
    /// Creates a new account with no registered URLs.
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
            redirects: Vec::new(),
        }
    }

    /// Records ownership of a newly registered short URL id.
    pub fn register_url(&mut self, short_url_id: String) {
        self.redirects.push(short_url_id);
    }
}

impl Keyed for Account {
    fn key(&self) -> &str {
        &self.id
    }
}
