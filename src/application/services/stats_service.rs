//! Per-account usage statistics service.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::repositories::{AccountRepository, UrlRepository};
use crate::error::AppError;

/// Service for reporting per-account registration statistics.
pub struct StatsService<A: AccountRepository, U: UrlRepository> {
    account_repository: Arc<A>,
    url_repository: Arc<U>,
}

impl<A: AccountRepository, U: UrlRepository> StatsService<A, U> {
    /// Creates a new statistics service.
    pub fn new(account_repository: Arc<A>, url_repository: Arc<U>) -> Self {
        Self {
            account_repository,
            url_repository,
        }
    }

    /// Returns the number of registrations per full-length URL under the
    /// account.
    ///
    /// Registering the same URL twice yields a count of 2. Redirect ids that
    /// no longer resolve are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no account matches the id.
    pub async fn redirect_counts(
        &self,
        account_id: &str,
    ) -> Result<BTreeMap<String, u64>, AppError> {
        debug!("Stats requested for account <{}>", account_id);

        let account = self
            .account_repository
            .read(account_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Account not found", json!({ "account_id": account_id }))
            })?;

        let mut counts = BTreeMap::new();
        for short_url_id in &account.redirects {
            if let Some(url) = self.url_repository.read(short_url_id).await? {
                *counts.entry(url.url).or_insert(0u64) += 1;
            }
        }

        Ok(counts)
    }
}
