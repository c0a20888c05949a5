//! Repository trait for account data access.

use crate::domain::entities::Account;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing accounts.
///
/// Provides CRUD operations for account records keyed by their
/// caller-assigned ids.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileAccountRepository`] -
///   file-backed implementation that also synchronizes the session registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts a new account record.
    ///
    /// Overwrites silently if the id is already present; rejecting duplicate
    /// ids is the responsibility of the calling service, which must check via
    /// [`Self::read`] before creating.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the record cannot be persisted.
    async fn create(&self, account: &Account) -> Result<(), AppError>;

    /// Finds an account by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Account))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Corruption`] when a stored record exists but can
    /// no longer be deserialized.
    async fn read(&self, id: &str) -> Result<Option<Account>, AppError>;

    /// Replaces an existing account record.
    ///
    /// Returns `Ok(true)` when a record with the same id existed and was
    /// replaced, `Ok(false)` when no such record exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the record cannot be persisted.
    async fn update(&self, account: &Account) -> Result<bool, AppError>;

    /// Deletes an account record.
    ///
    /// Returns `Ok(true)` when the id was present in cache or on disk,
    /// `Ok(false)` otherwise. A second delete of the same record returns
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backing file cannot be removed.
    async fn delete(&self, account: &Account) -> Result<bool, AppError>;

    /// Returns every persisted account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Corruption`] when any stored record cannot be
    /// deserialized.
    async fn list(&self) -> Result<Vec<Account>, AppError>;
}
