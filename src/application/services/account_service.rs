//! Account lifecycle service: creation, validation and cascaded deletion.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::Account;
use crate::domain::repositories::{AccountRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::keygen;

/// Service for opening and deleting accounts.
///
/// The duplicate-id check lives here, not in the store: the store inserts
/// blindly, so every account creation must go through this service.
pub struct AccountService<A: AccountRepository, U: UrlRepository> {
    account_repository: Arc<A>,
    url_repository: Arc<U>,
}

impl<A: AccountRepository, U: UrlRepository> AccountService<A, U> {
    /// Creates a new account service.
    pub fn new(account_repository: Arc<A>, url_repository: Arc<U>) -> Self {
        Self {
            account_repository,
            url_repository,
        }
    }

    /// Opens a new account under the caller-assigned id.
    ///
    /// The returned account carries the generated 8-character alphanumeric
    /// password; this is the only time it is handed back to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id is empty or contains
    /// characters other than letters, digits, hyphens and underscores.
    ///
    /// Returns [`AppError::Conflict`] if an account with the id already
    /// exists.
    pub async fn create_account(&self, id: &str) -> Result<Account, AppError> {
        validate_account_id(id)?;

        if self.account_repository.read(id).await?.is_some() {
            return Err(AppError::conflict(
                "AccountId already exists",
                json!({ "account_id": id }),
            ));
        }

        let account = Account::new(id, keygen::generate_key());
        self.account_repository.create(&account).await?;
        info!("Account added: {}", account.id);

        Ok(account)
    }

    /// Deletes the account and every URL registered under it.
    ///
    /// URLs named by the account's `redirects` are deleted first, then the
    /// account record; ids that no longer resolve are skipped. The cascade is
    /// a sequence of independently committed operations, not a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no account matches the id.
    pub async fn delete_account(&self, id: &str) -> Result<(), AppError> {
        let account = self
            .account_repository
            .read(id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found", json!({ "account_id": id })))?;

        for short_url_id in &account.redirects {
            if let Some(url) = self.url_repository.read(short_url_id).await? {
                self.url_repository.delete(&url).await?;
            }
        }

        self.account_repository.delete(&account).await?;
        info!("Account deleted: {}", id);

        Ok(())
    }
}

/// Validates a caller-assigned account id.
///
/// Ids become file names in the account store, so the allowed character set
/// is restricted to letters, digits, hyphens and underscores.
fn validate_account_id(id: &str) -> Result<(), AppError> {
    if id.is_empty() {
        return Err(AppError::bad_request(
            "AccountId cannot be empty",
            json!({}),
        ));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "AccountId can only contain letters, digits, hyphens and underscores",
            json!({ "account_id": id }),
        ));
    }

    Ok(())
}
