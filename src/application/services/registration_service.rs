//! URL registration service: unique short-id generation and account linking.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{REDIRECT_PERMANENT, REDIRECT_TEMPORARY, RegisteredUrl};
use crate::domain::repositories::{AccountRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::keygen;

/// Retry budget for unique short-id generation.
const MAX_KEY_RETRIES: usize = 5;

/// Service for registering full-length URLs and resolving short ids.
pub struct RegistrationService<A: AccountRepository, U: UrlRepository> {
    account_repository: Arc<A>,
    url_repository: Arc<U>,
}

impl<A: AccountRepository, U: UrlRepository> RegistrationService<A, U> {
    /// Creates a new registration service.
    pub fn new(account_repository: Arc<A>, url_repository: Arc<U>) -> Self {
        Self {
            account_repository,
            url_repository,
        }
    }

    /// Registers `url` under the given account and returns the stored record
    /// with its generated short id.
    ///
    /// The URL record is created first, then the id is appended to the
    /// account's `redirects` and the account updated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or
    /// `redirect_type` is neither 301 nor 302.
    ///
    /// Returns [`AppError::NotFound`] if no account matches `account_id`.
    ///
    /// Returns [`AppError::Internal`] when no unique short id could be
    /// generated within the retry budget.
    pub async fn register_url(
        &self,
        account_id: &str,
        url: String,
        redirect_type: u16,
    ) -> Result<RegisteredUrl, AppError> {
        if url.is_empty() {
            return Err(AppError::bad_request("url cannot be empty", json!({})));
        }
        if redirect_type != REDIRECT_PERMANENT && redirect_type != REDIRECT_TEMPORARY {
            return Err(AppError::bad_request(
                "redirectType can only be 301|302",
                json!({ "redirect_type": redirect_type }),
            ));
        }

        let mut account = self
            .account_repository
            .read(account_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Account not found", json!({ "account_id": account_id }))
            })?;

        info!(
            "Url registration requested by <{}> for target <{}>",
            account_id, url
        );

        let id = self.generate_unique_id().await?;
        let registered = RegisteredUrl::new(id, url, redirect_type);
        self.url_repository.create(&registered).await?;

        account.register_url(registered.id.clone());
        if !self.account_repository.update(&account).await? {
            return Err(AppError::conflict(
                "Account no longer exists",
                json!({ "account_id": account_id }),
            ));
        }

        info!(
            "Registered url <{}> under account <{}>",
            registered.id, account_id
        );
        Ok(registered)
    }

    /// Resolves a short id to its registered URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no URL matches the id.
    pub async fn resolve(&self, short_url_id: &str) -> Result<RegisteredUrl, AppError> {
        self.url_repository
            .read(short_url_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "id": short_url_id }))
            })
    }

    /// Generates a short id that is not yet present in the URL store.
    ///
    /// The random generator gives no uniqueness guarantee and the id becomes
    /// the primary key of the stored record, so each candidate is probed
    /// against the store. Key-space exhaustion is a capacity error, not a
    /// condition to retry indefinitely: generation gives up after
    /// `MAX_KEY_RETRIES` collisions.
    async fn generate_unique_id(&self) -> Result<String, AppError> {
        for _ in 0..=MAX_KEY_RETRIES {
            let key = keygen::generate_key();

            if self.url_repository.read(&key).await?.is_none() {
                return Ok(key);
            }
        }

        Err(AppError::internal(
            "Could not generate a unique short id",
            json!({ "retries": MAX_KEY_RETRIES }),
        ))
    }
}
